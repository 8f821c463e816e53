//! Dataset builder
//!
//! Fetches both upstream collections, extracts their objects, and runs the
//! combiner. A builder holds no dataset state; every call fetches afresh.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::combiner::DatasetCombiner;
use crate::extract::extract_objects;
use crate::models::Album;
use crate::Result;

/// Source of the raw upstream payloads
#[async_trait]
pub trait PlaceholderFetcher: Send + Sync {
    /// Raw body of the albums collection
    async fn fetch_albums_text(&self) -> Result<String>;

    /// Raw body of the photos collection
    async fn fetch_photos_text(&self) -> Result<String>;

    /// Where the collections come from, for status reporting
    fn sources(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Builds the joined album dataset on demand
pub struct DatasetBuilder<F: ?Sized> {
    fetcher: F,
}

impl<F: PlaceholderFetcher> DatasetBuilder<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

impl<F: PlaceholderFetcher + ?Sized> DatasetBuilder<F> {
    /// Upstream sources reported by the fetcher
    pub fn sources(&self) -> Vec<String> {
        self.fetcher.sources()
    }

    /// Every valid album with its photos
    pub async fn build_all(&self) -> Result<Vec<Album>> {
        let combiner = self.make_combiner().await?;
        Ok(combiner.into_dataset())
    }

    /// Albums owned by `user_id`; an unknown user yields an empty list
    pub async fn build_for_user(&self, user_id: i64) -> Result<Vec<Album>> {
        let combiner = self.make_combiner().await?;
        let albums: Vec<Album> = combiner
            .into_dataset()
            .into_iter()
            .filter(|album| album.user_id == user_id)
            .collect();

        debug!(user_id, albums = albums.len(), "Filtered dataset by user");
        Ok(albums)
    }

    async fn make_combiner(&self) -> Result<DatasetCombiner> {
        let (albums_text, photos_text) = tokio::try_join!(
            self.fetcher.fetch_albums_text(),
            self.fetcher.fetch_photos_text()
        )?;

        let albums = extract_objects(&albums_text)?;
        let photos = extract_objects(&photos_text)?;
        let combiner = DatasetCombiner::new(albums, photos);

        info!(albums = combiner.dataset().len(), "Combined album dataset");
        Ok(combiner)
    }
}
