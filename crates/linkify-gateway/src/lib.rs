//! HTTP gateway for the Linkify URL shortener.
//!
//! Maps method and path pairs onto a [`Shortener`](linkify_core::Shortener)
//! and encodes the results. The gateway itself holds no link state; the
//! shortener is handed in through [`AppState`].

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod server;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use server::{serve, ServerSettings};
pub use state::AppState;
