//! Tracing subscriber setup for the command-line front end.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "moonsplit=debug";

/// Resolves the active filter: `RUST_LOG` wins, then `--verbose`, then the
/// configured directives.
pub fn resolve_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else {
            EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("moonsplit=info"))
        }
    })
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for reports and exports.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(config, verbose))
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
