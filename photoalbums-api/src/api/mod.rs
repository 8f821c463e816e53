//! HTTP API handlers for photoalbums-api

pub mod albums;
pub mod health;

pub use albums::{get_albums_with_photos, get_albums_with_photos_for_user};
pub use health::health_routes;
