//! Tracing configuration for the registry process
//!
//! Installs one global `tracing-subscriber` registry. Records emitted through
//! the `log` facade (the pool initialization, some dependencies) are bridged
//! by the subscriber's `tracing-log` integration.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug for our crates
/// - **Production**: info for our crates
/// - **Driver**: the MongoDB driver stays at warn; its command events are noisy
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "mongodb=warn".to_string(),
        if is_dev { "da_infra=debug" } else { "da_infra=info" }.to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the built-in directives. Output format:
/// `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered; call this
/// once, before any logging occurs.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stdout);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
