//! Interactive client command handler.

use anyhow::{Context, Result};
use sesame_core::{config, logging};

pub fn run(config: &config::Config) -> Result<()> {
    // Fail on a bad origin before the terminal is taken over.
    config.base_url()?;

    let _log_guard = logging::init(config).context("initialize logging")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sesame starting");

    sesame_tui::run_interactive(config).context("interactive session failed")
}
