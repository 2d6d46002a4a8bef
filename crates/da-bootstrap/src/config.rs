//! # Configuration Loader
//!
//! Layers, lowest priority first:
//!
//! 1. built-in defaults ([`AppConfig::default`])
//! 2. an optional TOML file
//! 3. `DEVICEADM__<SECTION>__<KEY>` environment variables
//!
//! Pure data loading only. Whatever the sources say is accepted; a bad
//! endpoint surfaces when the store connects.

use std::path::Path;

use anyhow::Context;
use ::config::{Config, Environment, File, FileFormat};
use da_core::config::{app_config::DEFAULT_STORE_ENDPOINT, AppConfig};

pub const ENV_PREFIX: &str = "DEVICEADM";
const ENV_SEPARATOR: &str = "__";

/// Load configuration from an optional TOML file and the process environment.
///
/// # Errors
///
/// Returns error if:
/// - the file is given but cannot be read (I/O error)
/// - the content is not valid TOML
/// - a value has the wrong type for its field
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    load_config_from(config_path, None)
}

/// Same as [`load_config`], with the environment replaced by `env` when given.
pub fn load_config_from(
    config_path: Option<&Path>,
    env: Option<::config::Map<String, String>>,
) -> anyhow::Result<AppConfig> {
    let mut builder = Config::builder()
        .set_default("store.endpoint", DEFAULT_STORE_ENDPOINT)
        .context("Failed to set config defaults")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .source(env),
    );

    let settings = builder.build().with_context(|| match config_path {
        Some(path) => format!("Failed to read config file: {}", path.display()),
        None => "Failed to read config from environment".to_string(),
    })?;

    settings
        .try_deserialize::<AppConfig>()
        .context("Failed to parse config")
}
