use smol_str::SmolStr;
use std::fmt::Display;

/// The lookup key of a link record.
///
/// Codes produced by a generator are [`ShortCode::LENGTH`] lower-case hex
/// characters. Codes arriving from callers (e.g. a request path) are taken
/// as-is: an ill-formed code is simply one that no record is stored under.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Number of hex characters in a generated code (the first 3 digest bytes).
    pub const LENGTH: usize = 6;

    /// Wraps a caller-supplied code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code has the shape of a generated code.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::LENGTH
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShortCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ShortCode {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_codes() {
        assert!(ShortCode::new("100680").is_well_formed());
        assert!(ShortCode::new("abcdef").is_well_formed());
    }

    #[test]
    fn ill_formed_codes() {
        assert!(!ShortCode::new("").is_well_formed());
        assert!(!ShortCode::new("10068").is_well_formed());
        assert!(!ShortCode::new("1006800").is_well_formed());
        assert!(!ShortCode::new("ABCDEF").is_well_formed());
        assert!(!ShortCode::new("shorten").is_well_formed());
    }

    #[test]
    fn display_is_raw_code() {
        let code = ShortCode::new("4b5964");
        assert_eq!(code.to_string(), "4b5964");
        assert_eq!(format!("{:?}", code), "ShortCode(\"4b5964\")");
    }
}
