//! Command-line arguments
//!
//! Every setting is optional here so that TOML values survive unless a flag
//! or its environment variable overrides them.

use std::path::PathBuf;

use clap::Parser;
use photoalbums_common::config::TomlConfig;

/// Command-line arguments for photoalbums-api
#[derive(Parser, Debug, Default)]
#[command(name = "photoalbums-api")]
#[command(about = "Albums-with-photos aggregation service")]
#[command(version)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "PHOTOALBUMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "PHOTOALBUMS_BIND_ADDRESS")]
    pub bind_address: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PHOTOALBUMS_PORT")]
    pub port: Option<u16>,

    /// Base URL of the upstream placeholder service
    #[arg(long, env = "PHOTOALBUMS_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PHOTOALBUMS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Overlay command-line values onto a loaded configuration
    pub fn apply(&self, config: &mut TomlConfig) {
        if let Some(bind_address) = &self.bind_address {
            config.server.bind_address = bind_address.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(upstream_url) = &self.upstream_url {
            config.upstream.base_url = upstream_url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
