//! Core types and traits for the Linkify URL shortener.
//!
//! This crate provides the types shared by the generator, the storage
//! backend, the shortener service, and the HTTP gateway.

pub mod error;
pub mod link;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use error::{CoreError, Result};
pub use link::{LinkRecord, Visibility};
pub use shortcode::ShortCode;
pub use shortener::{ShortenParams, Shortener, CLEAR_ALL_CONFIRMATION};
pub use store::LinkStore;
