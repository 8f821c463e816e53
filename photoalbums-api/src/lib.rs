//! photoalbums-api library - albums-with-photos HTTP service
//!
//! Thin axum layer over [`photoalbums_common::DatasetBuilder`]. Each request
//! builds its own dataset from freshly fetched upstream data.

use std::sync::Arc;

use axum::Router;
use photoalbums_common::{DatasetBuilder, PlaceholderFetcher};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod error;

pub use error::ApiError;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset builder over the configured upstream fetcher
    pub builder: Arc<DatasetBuilder<dyn PlaceholderFetcher>>,
}

impl AppState {
    /// Create new application state around a fetcher
    pub fn new<F: PlaceholderFetcher + 'static>(fetcher: F) -> Self {
        let builder: Arc<DatasetBuilder<dyn PlaceholderFetcher>> =
            Arc::new(DatasetBuilder::new(fetcher));
        Self { builder }
    }
}

/// Build application router
///
/// `/api/photos` is kept as an alias of `/albums-with-photos` for older
/// clients.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let albums = Router::new()
        .route("/albums-with-photos", get(api::get_albums_with_photos))
        .route(
            "/albums-with-photos/:user_id",
            get(api::get_albums_with_photos_for_user),
        )
        .route("/api/photos", get(api::get_albums_with_photos))
        .route("/api/photos/:user_id", get(api::get_albums_with_photos_for_user));

    Router::new()
        .merge(albums)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
