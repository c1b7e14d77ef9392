//! Full-screen raid card browser.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{card, share};
use raidcard_core::MatchBoard;
use raidcard_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive card browser over `board`.
///
/// Must be called inside a tokio runtime.
pub fn run_board(board: MatchBoard, config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The card browser requires a terminal.\n\
             Use `raidcard share` or `raidcard inspect` for non-interactive use."
        );
    }

    tracing::info!(matches = board.matches.len(), "opening card browser");
    let mut runtime = TuiRuntime::new(board, config)?;
    runtime.run()
}
