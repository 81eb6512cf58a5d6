use thiserror::Error;

/// Errors surfaced by the core operations of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("short code not found: {0}")]
    NotFound(String),
}
