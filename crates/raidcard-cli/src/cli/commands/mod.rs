//! Command handlers.

pub mod config;
pub mod inspect;
pub mod share;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use raidcard_core::{GroupedMatch, MatchBoard};

/// Loads the board at `path`.
fn load_board(path: &Path) -> Result<MatchBoard> {
    MatchBoard::load(path).with_context(|| format!("load board {}", path.display()))
}

/// Picks the match for `raid`, or the first match when none is given.
fn select_match<'a>(board: &'a MatchBoard, raid: Option<&str>) -> Result<&'a GroupedMatch> {
    match raid {
        Some(id) => board
            .find(id)
            .with_context(|| format!("No match with raid id '{id}' on this board")),
        None => board
            .matches
            .first()
            .context("Board contains no matches"),
    }
}
