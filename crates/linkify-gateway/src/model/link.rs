use std::collections::HashMap;

use linkify_core::LinkRecord;
use serde::Serialize;

/// Body of `POST /shorten`: a JSON object of string values.
#[derive(Debug, Default)]
pub struct ShortenRequest {
    fields: HashMap<String, String>,
}

impl ShortenRequest {
    /// Decodes the first JSON value in `body`. Anything after it is ignored.
    ///
    /// A JSON `null` decodes to an empty request. Returns `None` for an
    /// empty body, invalid JSON, or an object with non-string values.
    pub fn decode(body: &[u8]) -> Option<Self> {
        let fields = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<HashMap<String, String>>>()
            .next()?
            .ok()?
            .unwrap_or_default();
        Some(Self { fields })
    }

    pub fn into_url(mut self) -> Option<String> {
        self.fields.remove("url")
    }
}

/// A link record as it appears in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResponse {
    #[serde(rename = "ShortURL")]
    pub short_url: String,
    #[serde(rename = "LongURL")]
    pub long_url: String,
    #[serde(rename = "IsPublic")]
    pub is_public: bool,
}

impl From<LinkRecord> for LinkResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            is_public: record.is_public(),
            short_url: record.short_code.to_string(),
            long_url: record.original_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkify_core::{ShortCode, Visibility};

    #[test]
    fn decode_url_field() {
        let request = ShortenRequest::decode(br#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(request.into_url().as_deref(), Some("https://example.com"));
    }

    #[test]
    fn decode_ignores_trailing_data() {
        let request = ShortenRequest::decode(br#"{"url": "https://a.com"} trailing"#).unwrap();
        assert_eq!(request.into_url().as_deref(), Some("https://a.com"));
    }

    #[test]
    fn decode_missing_url() {
        let request = ShortenRequest::decode(br#"{"link": "https://a.com"}"#).unwrap();
        assert!(request.into_url().is_none());

        let request = ShortenRequest::decode(b"null").unwrap();
        assert!(request.into_url().is_none());
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        assert!(ShortenRequest::decode(b"").is_none());
        assert!(ShortenRequest::decode(b"not json").is_none());
        assert!(ShortenRequest::decode(br#"{"url": 42}"#).is_none());
        assert!(ShortenRequest::decode(br#"["https://a.com"]"#).is_none());
    }

    #[test]
    fn link_response_field_names() {
        let response = LinkResponse::from(LinkRecord {
            short_code: ShortCode::new("100680"),
            original_url: "https://example.com".to_string(),
            visibility: Visibility::Public,
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "ShortURL": "100680",
                "LongURL": "https://example.com",
                "IsPublic": true,
            })
        );
    }
}
