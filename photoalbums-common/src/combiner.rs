//! Album/photo join
//!
//! Photos are grouped by the raw JSON token of their `albumId` and attached to
//! the album whose raw `id` token is identical. Token identity is textual:
//! `1`, `1.0` and `"1"` are three different keys. Photos without an `albumId`
//! key, or whose key names no album, never appear in the output and are not
//! logged. Photos in an unclaimed group are never validated at all.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::mapping::{map_album, map_photo};
use crate::models::{Album, Photo, RawRecord};

const ALBUM_ID: &str = "id";
const PHOTO_ALBUM_ID: &str = "albumId";

/// Grouping key: the compact JSON text of a raw key value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct KeyToken(String);

impl KeyToken {
    fn of(value: &Value) -> Self {
        Self(value.to_string())
    }
}

/// Joined dataset, computed once when the combiner is built
#[derive(Debug, Clone)]
pub struct DatasetCombiner {
    dataset: Vec<Album>,
}

impl DatasetCombiner {
    /// Validate and join the raw albums and photos.
    ///
    /// Album order follows `albums`; photo order within an album follows
    /// `photos`.
    pub fn new<A, P>(albums: A, photos: P) -> Self
    where
        A: IntoIterator<Item = RawRecord>,
        P: IntoIterator<Item = RawRecord>,
    {
        let grouped = group_by_album(photos);
        debug!(groups = grouped.len(), "Grouped photos by album key");

        let dataset = albums
            .into_iter()
            .filter_map(|raw| make_album(&raw, &grouped))
            .collect();

        Self { dataset }
    }

    /// The joined albums
    pub fn dataset(&self) -> &[Album] {
        &self.dataset
    }

    /// Take ownership of the joined albums
    pub fn into_dataset(self) -> Vec<Album> {
        self.dataset
    }
}

fn group_by_album<P>(photos: P) -> HashMap<KeyToken, Vec<RawRecord>>
where
    P: IntoIterator<Item = RawRecord>,
{
    let mut groups: HashMap<KeyToken, Vec<RawRecord>> = HashMap::new();

    for photo in photos {
        let Some(key) = photo.get(PHOTO_ALBUM_ID).map(KeyToken::of) else {
            continue;
        };
        groups.entry(key).or_default().push(photo);
    }

    groups
}

fn make_album(raw: &RawRecord, grouped: &HashMap<KeyToken, Vec<RawRecord>>) -> Option<Album> {
    let album = map_album(raw)?;

    let photos: Vec<Photo> = raw
        .get(ALBUM_ID)
        .and_then(|id| grouped.get(&KeyToken::of(id)))
        .map(|group| group.iter().filter_map(map_photo).collect())
        .unwrap_or_default();

    Some(album.with_photos(photos))
}
