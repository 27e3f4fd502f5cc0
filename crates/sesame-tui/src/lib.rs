//! Full-screen terminal UI for sesame.
//!
//! Elm-style: `state` is mutated only by `update::update`, which returns
//! `effects` for the `runtime` to execute; `render` draws from state.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;
pub mod widgets;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use sesame_core::config::Config;

/// Runs the interactive login client until the user quits.
///
/// Must be called from within a tokio runtime; requests are spawned onto it.
///
/// # Errors
/// Returns an error if no terminal is attached or the runtime fails.
pub fn run_interactive(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("sesame requires a terminal.");
    }

    tracing::info!(base_url = %config.base_url, "starting interactive session");
    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()
}
