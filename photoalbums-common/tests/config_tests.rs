//! Tests for configuration file loading and graceful degradation

use std::io::Write;
use std::path::Path;

use photoalbums_common::config::{default_config_path, ConfigSource, TomlConfig};
use photoalbums_common::Error;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
    file.write_all(contents.as_bytes())
        .expect("Should write config");
    file
}

#[test]
fn test_load_explicit_file() {
    let file = write_config(
        r#"
        [server]
        bind_address = "0.0.0.0"
        port = 8088

        [upstream]
        base_url = "https://jsonplaceholder.typicode.com"
        request_timeout_secs = 10

        [logging]
        level = "debug"
        "#,
    );

    let (config, source) = TomlConfig::load(Some(file.path())).expect("Should load config");

    assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.upstream.request_timeout_secs, 10);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.upstream.albums_url().unwrap().as_str(),
        "https://jsonplaceholder.typicode.com/albums"
    );
}

#[test]
fn test_missing_explicit_file_is_error() {
    let result = TomlConfig::load(Some(Path::new("/nonexistent/photoalbums/config.toml")));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_unparseable_file_is_error() {
    let file = write_config("server = [");

    let result = TomlConfig::load(Some(file.path()));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_custom_paths() {
    let file = write_config(
        r#"
        [upstream]
        base_url = "http://localhost:9000/mirror"
        albums_path = "albums.json"
        photos_path = "/photos.json"
        "#,
    );

    let (config, _) = TomlConfig::load(Some(file.path())).expect("Should load config");

    assert_eq!(
        config.upstream.albums_url().unwrap().as_str(),
        "http://localhost:9000/mirror/albums.json"
    );
    assert_eq!(
        config.upstream.photos_url().unwrap().as_str(),
        "http://localhost:9000/mirror/photos.json"
    );
}

#[test]
fn test_default_location_missing_falls_back_to_defaults() {
    // Only meaningful when the developer has no personal config installed
    if default_config_path().map_or(false, |p| p.exists()) {
        return;
    }

    let (config, source) = TomlConfig::load(None).expect("Missing config must not fail");

    assert_eq!(config, TomlConfig::default());
    assert!(matches!(source, ConfigSource::Defaults { .. }));
}
