//! Interactive board browser.

use std::path::Path;

use anyhow::Result;
use raidcard_core::config::Config;

pub fn run(board_path: &Path, config: &Config) -> Result<()> {
    let board = super::load_board(board_path)?;
    raidcard_tui::run_board(board, config)
}
