//! Tests for command-line and environment overrides
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.

use std::env;

use clap::Parser;
use photoalbums_api::cli::Args;
use photoalbums_common::config::TomlConfig;
use serial_test::serial;

const ENV_VARS: [&str; 5] = [
    "PHOTOALBUMS_CONFIG",
    "PHOTOALBUMS_BIND_ADDRESS",
    "PHOTOALBUMS_PORT",
    "PHOTOALBUMS_UPSTREAM_URL",
    "PHOTOALBUMS_LOG_LEVEL",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_no_arguments_leave_everything_unset() {
    clear_env();

    let args = Args::try_parse_from(["photoalbums-api"]).unwrap();

    assert!(args.config.is_none());
    assert!(args.port.is_none());
    assert!(args.upstream_url.is_none());
}

#[test]
#[serial]
fn test_environment_overrides_config() {
    clear_env();
    env::set_var("PHOTOALBUMS_PORT", "7070");
    env::set_var("PHOTOALBUMS_UPSTREAM_URL", "http://127.0.0.1:3000");

    let args = Args::try_parse_from(["photoalbums-api"]).unwrap();
    let mut config = TomlConfig::default();
    args.apply(&mut config);

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.upstream.base_url, "http://127.0.0.1:3000");
    assert_eq!(config.server.bind_address, "127.0.0.1");

    clear_env();
}

#[test]
#[serial]
fn test_flag_takes_precedence_over_environment() {
    clear_env();
    env::set_var("PHOTOALBUMS_PORT", "7070");

    let args = Args::try_parse_from(["photoalbums-api", "--port", "8080"]).unwrap();

    assert_eq!(args.port, Some(8080));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();

    let result = Args::try_parse_from(["photoalbums-api", "--port", "not-a-port"]);

    assert!(result.is_err());
}
