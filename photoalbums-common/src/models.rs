//! Album and photo records produced by the combiner
//!
//! Field order and names mirror the JSON payload handed to API clients:
//! albums serialize as `{"userId", "id", "title", "photos"}` and photos as
//! `{"id", "title", "uri", "thumbnailUri"}`.

use serde::Serialize;
use std::fmt;

/// An untyped JSON object exactly as decoded from the upstream payload
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// An album with the photos that reference it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub photos: Vec<Photo>,
}

impl Album {
    /// Create an album with no photos attached
    pub fn new(user_id: i64, id: i64, title: impl Into<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
            photos: Vec::new(),
        }
    }

    /// Attach the album's photos, consuming the album
    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }
}

/// A photo; it does not know which album owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub uri: AbsoluteUri,
    pub thumbnail_uri: AbsoluteUri,
}

/// Text that has been checked to be a well-formed absolute URI.
///
/// The original text is kept (and serialized) as received; it is not
/// normalized by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AbsoluteUri(String);

impl AbsoluteUri {
    /// Validate `text` as an absolute URI.
    ///
    /// Rejects relative references, anything `reqwest::Url` cannot parse, and
    /// text containing whitespace or control characters (which the parser
    /// would otherwise silently percent-encode or strip).
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return None;
        }

        reqwest::Url::parse(text).ok().map(|_| Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbsoluteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
