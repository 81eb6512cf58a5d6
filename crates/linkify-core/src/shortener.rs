use crate::error::Result;
use crate::link::{LinkRecord, Visibility};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Message returned by [`Shortener::clear_all`].
pub const CLEAR_ALL_CONFIRMATION: &str = "All URLs deleted";

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The URL to be shortened, stored verbatim.
    pub original_url: String,
    /// Which listings the link appears in.
    pub visibility: Visibility,
}

impl ShortenParams {
    pub fn new(original_url: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            original_url: original_url.into(),
            visibility,
        }
    }

    pub fn public(original_url: impl Into<String>) -> Self {
        Self::new(original_url, Visibility::Public)
    }

    pub fn private(original_url: impl Into<String>) -> Self {
        Self::new(original_url, Visibility::Private)
    }
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Stores the URL and returns the short code derived from it.
    ///
    /// Shortening the same URL again yields the same code and replaces the
    /// stored record, so the latest visibility wins.
    async fn shorten(&self, params: ShortenParams) -> ShortCode;

    /// Resolves a short code to the URL stored under it.
    /// Returns `Err(NotFound)` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<String>;

    /// Every stored link, in no particular order.
    async fn list_all(&self) -> Vec<LinkRecord>;

    /// Links created with [`Visibility::Public`].
    async fn list_public(&self) -> Vec<LinkRecord>;

    /// Links created with [`Visibility::Private`].
    async fn list_private(&self) -> Vec<LinkRecord>;

    /// Removes every stored link and returns [`CLEAR_ALL_CONFIRMATION`].
    async fn clear_all(&self) -> String;
}
