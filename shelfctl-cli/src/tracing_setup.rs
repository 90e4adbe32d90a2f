//! Tracing setup for the shelfctl CLI
//!
//! Usage:
//!   shelfctl --debug ...              # Debug logging to console
//!   RUST_LOG=shelfctl=debug shelfctl  # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// `--debug` raises the default level to debug unless RUST_LOG is already
/// set, in which case the explicit filter wins.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
