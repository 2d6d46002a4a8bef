use std::io;
use std::path::PathBuf;

use anyhow::Context;
use da_bootstrap::{config::load_config, tracing::init_tracing_subscriber, wiring};
use da_core::device::status;
use tracing::info;

/// Environment variable naming an optional TOML config file.
const CONFIG_PATH_ENV: &str = "DEVICEADM_CONFIG";

/// Only an absent `.env` file is tolerated; unreadable or malformed ones fail.
fn allow_missing_env_file<T>(result: dotenvy::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("Failed to load .env file"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    allow_missing_env_file(dotenvy::dotenv())?;

    init_tracing_subscriber().context("Failed to initialize tracing")?;

    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    info!("Configuration loaded");

    let store = wiring::build_device_store(&config).await?;

    let pending = store
        .get_devices(0, 0, status::PENDING)
        .await
        .context("Failed to list pending devices")?;
    info!(pending = pending.len(), "Devices awaiting admission");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_env_file_is_ignored() {
        let result = dotenvy::from_path("/this/path/does/not/exist/.env");

        assert!(allow_missing_env_file(result).is_ok());
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let mut env_file = NamedTempFile::new().unwrap();
        env_file
            .write_all(b"DEVICEADM_BROKEN='unterminated\n")
            .unwrap();

        let err = allow_missing_env_file(dotenvy::from_path(env_file.path())).unwrap_err();

        assert!(
            err.to_string().contains("Failed to load .env file"),
            "unexpected error: {err:#}"
        );
    }
}
