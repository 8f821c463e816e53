//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments (applied by the binary)
//! 2. Environment variables (applied by the binary through clap)
//! 3. TOML config file
//! 4. Compiled defaults
//!
//! A missing config file is not an error: a warning is logged and the
//! compiled defaults are used. A file that exists but cannot be parsed is.

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "PHOTOALBUMS_CONFIG";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file was found; `looked_for` is the default location, if any
    Defaults { looked_for: Option<PathBuf> },
}

impl ConfigSource {
    /// Log where configuration was loaded from
    pub fn report(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded configuration from {}", path.display()),
            ConfigSource::Defaults {
                looked_for: Some(path),
            } => warn!(
                "Config file not found at {} (using compiled defaults)",
                path.display()
            ),
            ConfigSource::Defaults { looked_for: None } => {
                warn!("Could not determine config directory (using compiled defaults)")
            }
        }
    }
}

/// Top-level TOML configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the raw collections are fetched from
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UpstreamConfig {
    /// Scheme and host of the placeholder service, optionally with a path prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_albums_path")]
    pub albums_path: String,

    #[serde(default = "default_photos_path")]
    pub photos_path: String,

    /// Per-request timeout for the HTTP client
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5080
}

fn default_base_url() -> String {
    "http://jsonplaceholder.typicode.com".to_string()
}

fn default_albums_path() -> String {
    "/albums".to_string()
}

fn default_photos_path() -> String {
    "/photos".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            albums_path: default_albums_path(),
            photos_path: default_photos_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl UpstreamConfig {
    pub fn albums_url(&self) -> Result<Url> {
        self.endpoint(&self.albums_path)
    }

    pub fn photos_url(&self) -> Result<Url> {
        self.endpoint(&self.photos_path)
    }

    /// Append `path` to the base URL, keeping any path prefix the base has
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid upstream base_url {:?}: {}", self.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Upstream base_url {:?} cannot carry a path",
                self.base_url
            )));
        }

        let joined = format!(
            "{}/{}",
            base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| Error::Config(format!("Invalid upstream endpoint {:?}: {}", joined, e)))
    }
}

impl TomlConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TomlConfig =
            toml::from_str(text).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path (from `--config` or [`CONFIG_ENV_VAR`]) must exist.
    /// Otherwise the platform default location is tried and replaced by
    /// compiled defaults when absent. Nothing is logged here since this runs
    /// before the subscriber is installed; callers report the returned
    /// [`ConfigSource`].
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit_path {
            let config = Self::load_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                let config = Self::load_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            looked_for => Ok((Self::default(), ConfigSource::Defaults { looked_for })),
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject settings that would only fail later, at request time
    pub fn validate(&self) -> Result<()> {
        self.upstream.albums_url()?;
        self.upstream.photos_url()?;

        if self.upstream.request_timeout_secs == 0 {
            return Err(Error::Config(
                "upstream.request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// `<config_dir>/photoalbums/config.toml` for the current platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("photoalbums").join("config.toml"))
}
