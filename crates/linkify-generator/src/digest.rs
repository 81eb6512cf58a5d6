use crate::Generator;
use linkify_core::ShortCode;
use sha2::{Digest, Sha256};

/// Derives a short code from the SHA-256 digest of the URL bytes.
///
/// The code is the hex encoding of the first [`DigestGenerator::PREFIX_BYTES`]
/// bytes of the digest. Distinct URLs sharing that prefix map to the same
/// code; nothing here detects it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestGenerator;

impl DigestGenerator {
    pub const PREFIX_BYTES: usize = ShortCode::LENGTH / 2;

    pub fn new() -> Self {
        Self
    }
}

impl Generator for DigestGenerator {
    fn generate(&self, original_url: &str) -> ShortCode {
        let digest = Sha256::digest(original_url.as_bytes());
        ShortCode::from(hex::encode(&digest[..Self::PREFIX_BYTES]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest_prefixes() {
        let generator = DigestGenerator::new();

        assert_eq!(generator.generate("https://example.com").as_str(), "100680");
        assert_eq!(generator.generate("https://a.com").as_str(), "4b5964");
        assert_eq!(generator.generate("https://www.rust-lang.org").as_str(), "24c164");
    }

    #[test]
    fn empty_input_is_accepted() {
        // sha256("") = e3b0c442...
        assert_eq!(DigestGenerator::new().generate("").as_str(), "e3b0c4");
    }

    #[test]
    fn same_url_same_code() {
        let generator = DigestGenerator::new();

        let first = generator.generate("not even a url");
        let second = generator.generate("not even a url");

        assert_eq!(first, second);
        assert!(first.is_well_formed());
    }

    #[test]
    fn input_is_not_normalized() {
        let generator = DigestGenerator::new();

        assert_ne!(
            generator.generate("https://example.com"),
            generator.generate("https://example.com/")
        );
        assert_ne!(
            generator.generate("https://example.com"),
            generator.generate("HTTPS://EXAMPLE.COM")
        );
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DigestGenerator>();
    }
}
