pub mod digest;

pub use digest::DigestGenerator;

use linkify_core::ShortCode;

/// Trait for deriving short codes.
///
/// Implementations are pure functions of their input and don't interact
/// with storage: the same URL must always produce the same code.
pub trait Generator: Send + Sync + 'static {
    /// Derives the short code for `original_url`.
    fn generate(&self, original_url: &str) -> ShortCode;
}
