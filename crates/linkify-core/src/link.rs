use crate::shortcode::ShortCode;

/// Whether a link shows up in public or private listings.
///
/// Set once when the link is shortened and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl From<bool> for Visibility {
    fn from(is_public: bool) -> Self {
        if is_public {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// A stored mapping from a short code to the URL it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// The key the record is stored under.
    pub short_code: ShortCode,
    /// The URL exactly as it was submitted.
    pub original_url: String,
    pub visibility: Visibility,
}

impl LinkRecord {
    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}
