//! Albums-with-photos endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use photoalbums_common::Album;
use tracing::debug;

use crate::{ApiError, AppState};

/// GET /albums-with-photos
///
/// Every album with its photos, in upstream order.
pub async fn get_albums_with_photos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state.builder.build_all().await?;
    debug!(albums = albums.len(), "Returning full album dataset");
    Ok(Json(albums))
}

/// GET /albums-with-photos/:user_id
///
/// Albums owned by one user. The id must be an integer; anything else is
/// treated as an unknown route.
pub async fn get_albums_with_photos_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let user_id: i64 = user_id
        .parse()
        .map_err(|_| ApiError::InvalidUserId(user_id.clone()))?;

    let albums = state.builder.build_for_user(user_id).await?;
    debug!(user_id, albums = albums.len(), "Returning album dataset for user");
    Ok(Json(albums))
}
