//! Raw record validation
//!
//! Maps a [`RawRecord`] onto an [`Album`] or [`Photo`]. Every required field
//! is read with a type rule; the first field that fails rejects the whole
//! record and logs a single info line carrying the full record JSON. A
//! rejected record is an expected outcome, so the mappers return `Option`.

use std::fmt;

use serde_json::Value;
use tracing::info;

use crate::models::{AbsoluteUri, Album, Photo, RawRecord};

/// Which kind of record is being read, as it appears in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Album,
    Photo,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Album => f.write_str("album"),
            RecordKind::Photo => f.write_str("photo"),
        }
    }
}

/// Type rule applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Textual form parses as an i64 (`7` and `"7"` both pass)
    Integer,
    /// A JSON string; numbers and other scalars do not qualify
    Text,
    /// A JSON string holding a well-formed absolute URI
    Uri,
}

/// Value produced by a successful [`FieldRule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Uri(AbsoluteUri),
}

/// Why a field could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    WrongType(FieldRule),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing => f.write_str("missing"),
            FieldError::WrongType(rule) => write!(f, "not a valid {:?}", rule),
        }
    }
}

impl FieldRule {
    /// Apply the rule to a field's value (`None` when the key is absent)
    pub fn apply(self, value: Option<&Value>) -> Result<FieldValue, FieldError> {
        match self {
            FieldRule::Integer => read_integer(value).map(FieldValue::Integer),
            FieldRule::Text => read_text(value).map(FieldValue::Text),
            FieldRule::Uri => read_uri(value).map(FieldValue::Uri),
        }
    }
}

type ReadFn<T> = fn(Option<&Value>) -> Result<T, FieldError>;

fn read_integer(value: Option<&Value>) -> Result<i64, FieldError> {
    let value = value.ok_or(FieldError::Missing)?;
    integer_text(value)
        .and_then(|text| text.trim().parse::<i64>().ok())
        .ok_or(FieldError::WrongType(FieldRule::Integer))
}

fn read_text(value: Option<&Value>) -> Result<String, FieldError> {
    match value.ok_or(FieldError::Missing)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(FieldError::WrongType(FieldRule::Text)),
    }
}

fn read_uri(value: Option<&Value>) -> Result<AbsoluteUri, FieldError> {
    match value.ok_or(FieldError::Missing)? {
        Value::String(s) => AbsoluteUri::parse(s).ok_or(FieldError::WrongType(FieldRule::Uri)),
        _ => Err(FieldError::WrongType(FieldRule::Uri)),
    }
}

/// Textual form of a scalar, as an integer parser would see it.
///
/// Floats print in their shortest form, so `1.0` reads as `1` and `1e2` as
/// `100`, while `1.5` stays fractional.
fn integer_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        Value::Number(n) => n.as_f64().map(|f| f.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Reads rule-checked fields out of one raw record, logging the first failure
struct FieldReader<'a> {
    raw: &'a RawRecord,
    kind: RecordKind,
}

impl<'a> FieldReader<'a> {
    fn new(raw: &'a RawRecord, kind: RecordKind) -> Self {
        Self { raw, kind }
    }

    fn read<T>(&self, field: &str, rule: ReadFn<T>) -> Option<T> {
        match rule(self.raw.get(field)) {
            Ok(value) => Some(value),
            Err(reason) => {
                let json = serde_json::to_string(self.raw).unwrap_or_default();
                info!(
                    record = %self.kind,
                    field,
                    reason = %reason,
                    "Cannot extract {} from {}. Json: {}",
                    field,
                    self.kind,
                    json
                );
                None
            }
        }
    }

    fn integer(&self, field: &str) -> Option<i64> {
        self.read(field, read_integer)
    }

    fn text(&self, field: &str) -> Option<String> {
        self.read(field, read_text)
    }

    fn uri(&self, field: &str) -> Option<AbsoluteUri> {
        self.read(field, read_uri)
    }
}

/// Build an album (without photos) from a raw record.
///
/// Fields are checked in the order `id`, `userId`, `title`.
pub fn map_album(raw: &RawRecord) -> Option<Album> {
    let reader = FieldReader::new(raw, RecordKind::Album);

    let id = reader.integer("id")?;
    let user_id = reader.integer("userId")?;
    let title = reader.text("title")?;

    Some(Album::new(user_id, id, title))
}

/// Build a photo from a raw record.
///
/// Fields are checked in the order `id`, `title`, `url`, `thumbnailUrl`.
pub fn map_photo(raw: &RawRecord) -> Option<Photo> {
    let reader = FieldReader::new(raw, RecordKind::Photo);

    Some(Photo {
        id: reader.integer("id")?,
        title: reader.text("title")?,
        uri: reader.uri("url")?,
        thumbnail_uri: reader.uri("thumbnailUrl")?,
    })
}
