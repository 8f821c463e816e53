//! # photoalbums common library
//!
//! Core of the albums-with-photos service:
//! - JSON array extraction from upstream payloads
//! - Album and photo record validation
//! - Joining photos into their albums
//! - Dataset building over a pluggable fetcher
//! - Configuration loading

pub mod builder;
pub mod combiner;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod mapping;
pub mod models;

#[cfg(test)]
mod test_support;

pub use builder::{DatasetBuilder, PlaceholderFetcher};
pub use combiner::DatasetCombiner;
pub use error::{Error, Result};
pub use fetcher::HttpFetcher;
pub use models::{AbsoluteUri, Album, Photo, RawRecord};
