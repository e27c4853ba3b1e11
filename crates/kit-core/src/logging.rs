//! Logging setup for hosts embedding config-kit

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: config-kit crates at `info`,
/// everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,kit_core=info,kit_modules=info,kit_depcruise=info";

/// Install a global subscriber with the [`DEFAULT_FILTER`].
///
/// Logs go to stderr so a plan printed on stdout stays clean.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with(DEFAULT_FILTER)
}

/// Install a global subscriber, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid.
///
/// Fails if a global subscriber is already installed.
pub fn init_with(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
