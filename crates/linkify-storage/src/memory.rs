use linkify_core::{LinkRecord, LinkStore, ShortCode, Visibility};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::trace;

/// In-memory implementation of [`LinkStore`].
///
/// The whole table sits behind one mutex and every operation holds it for
/// its full duration, so reads, writes and clears are serialized against
/// each other. The lock is never held across an await point and no
/// operation calls another while holding it.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    links: Mutex<HashMap<ShortCode, LinkRecord>>,
}

impl InMemoryLinkStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }
}

impl LinkStore for InMemoryLinkStore {
    fn insert(&self, record: LinkRecord) -> Option<LinkRecord> {
        let mut links = self.links.lock();
        links.insert(record.short_code.clone(), record)
    }

    fn get(&self, code: &ShortCode) -> Option<LinkRecord> {
        self.links.lock().get(code).cloned()
    }

    fn list(&self, visibility: Option<Visibility>) -> Vec<LinkRecord> {
        let links = self.links.lock();
        links
            .values()
            .filter(|record| match visibility {
                Some(v) => record.visibility == v,
                None => true,
            })
            .cloned()
            .collect()
    }

    fn clear(&self) -> usize {
        // The old table is dropped after the guard is released.
        let removed = std::mem::take(&mut *self.links.lock()).len();
        trace!(removed, "link table cleared");
        removed
    }

    fn len(&self) -> usize {
        self.links.lock().len()
    }
}
