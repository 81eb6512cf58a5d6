use crate::link::{LinkRecord, Visibility};
use crate::shortcode::ShortCode;

/// The table of link records, keyed by short code.
///
/// Every call observes a single consistent view of the table: an
/// implementation must not let a [`clear`](LinkStore::clear) interleave with
/// a concurrent [`insert`](LinkStore::insert) or listing. None of the
/// operations can fail.
#[allow(clippy::len_without_is_empty)]
pub trait LinkStore: Send + Sync + 'static {
    /// Inserts the record, replacing any record under the same code.
    /// Returns the replaced record, if there was one.
    fn insert(&self, record: LinkRecord) -> Option<LinkRecord>;

    /// Returns the record stored under `code`.
    fn get(&self, code: &ShortCode) -> Option<LinkRecord>;

    /// Returns a snapshot of the records, in no particular order.
    ///
    /// `None` returns every record; `Some(visibility)` only those with
    /// that visibility.
    fn list(&self, visibility: Option<Visibility>) -> Vec<LinkRecord>;

    /// Atomically replaces the table with an empty one. Returns how many
    /// records were dropped.
    fn clear(&self) -> usize;

    /// Number of records currently stored.
    fn len(&self) -> usize;
}
