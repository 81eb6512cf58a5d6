//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which ties a code
//! [`Generator`](linkify_generator::Generator) to a
//! [`LinkStore`](linkify_core::LinkStore). Core types are re-exported from
//! `linkify_core`.

pub mod service;

pub use linkify_core::{CoreError, LinkRecord, ShortCode, ShortenParams, Shortener, Visibility};
pub use service::{InMemoryShortener, ShortenerService};
