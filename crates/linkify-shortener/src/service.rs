use async_trait::async_trait;
use linkify_core::{
    CoreError, LinkRecord, LinkStore, Result, ShortCode, ShortenParams, Shortener, Visibility,
    CLEAR_ALL_CONFIRMATION,
};
use linkify_generator::{DigestGenerator, Generator};
use linkify_storage::InMemoryLinkStore;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `LinkStore` and a `Generator`. The code is derived
/// outside the store lock; each store call then runs under the store's own
/// locking.
///
/// Note: two different URLs whose codes collide overwrite each other. The
/// overwrite is logged, not rejected.
#[derive(Debug)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
        }
    }
}

/// The shortener the gateway runs with: in-memory table, SHA-256 prefix codes.
pub type InMemoryShortener = ShortenerService<InMemoryLinkStore, DigestGenerator>;

impl InMemoryShortener {
    /// An empty in-memory store with SHA-256 prefix codes.
    pub fn in_memory() -> Self {
        Self::new(InMemoryLinkStore::new(), DigestGenerator::new())
    }
}

impl<S: LinkStore, G: Generator> ShortenerService<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<S: LinkStore, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, params: ShortenParams) -> ShortCode {
        let ShortenParams {
            original_url,
            visibility,
        } = params;
        let short_code = self.generator.generate(&original_url);
        debug_assert!(
            short_code.is_well_formed(),
            "generator produced malformed code {short_code}"
        );

        let record = LinkRecord {
            short_code: short_code.clone(),
            original_url: original_url.clone(),
            visibility,
        };

        match self.store.insert(record) {
            Some(previous) if previous.original_url != original_url => {
                warn!(
                    code = %short_code,
                    url = %original_url,
                    replaced_url = %previous.original_url,
                    "short code collision, previous link overwritten"
                );
            }
            Some(previous) => {
                debug!(
                    code = %short_code,
                    ?visibility,
                    previous_visibility = ?previous.visibility,
                    "link re-shortened"
                );
            }
            None => {
                debug!(
                    code = %short_code,
                    ?visibility,
                    links = self.store.len(),
                    "link shortened"
                );
            }
        }

        short_code
    }

    async fn resolve(&self, code: &ShortCode) -> Result<String> {
        trace!(code = %code, "resolving short code");

        match self.store.get(code) {
            Some(record) => {
                debug!(code = %code, url = %record.original_url, "resolved short code");
                Ok(record.original_url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(CoreError::NotFound(code.to_string()))
            }
        }
    }

    async fn list_all(&self) -> Vec<LinkRecord> {
        self.store.list(None)
    }

    async fn list_public(&self) -> Vec<LinkRecord> {
        self.store.list(Some(Visibility::Public))
    }

    async fn list_private(&self) -> Vec<LinkRecord> {
        self.store.list(Some(Visibility::Private))
    }

    async fn clear_all(&self) -> String {
        let removed = self.store.clear();
        info!(removed, "all links deleted");
        CLEAR_ALL_CONFIRMATION.to_string()
    }
}
