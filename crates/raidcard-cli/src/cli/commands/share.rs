//! Non-interactive share: resolve picks, print the party text.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use raidcard_core::{GroupedMatch, SelectionStore, format_share, summarize};

/// A `SLOT=NAME[@SERVER]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// Slot label, or a 1-based slot number.
    pub slot: String,
    pub name: String,
    pub server: Option<String>,
}

impl FromStr for Pick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slot, candidate) = s
            .split_once('=')
            .ok_or_else(|| format!("expected SLOT=NAME[@SERVER], got '{s}'"))?;
        let (name, server) = match candidate.rsplit_once('@') {
            Some((name, server)) => (name, Some(server)),
            None => (candidate, None),
        };

        let slot = slot.trim();
        let name = name.trim();
        if slot.is_empty() || name.is_empty() {
            return Err(format!("expected SLOT=NAME[@SERVER], got '{s}'"));
        }
        Ok(Self {
            slot: slot.to_string(),
            name: name.to_string(),
            server: server
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

impl Pick {
    /// Slot index this pick refers to. Labels win over numbers.
    fn resolve_slot(&self, grouped: &GroupedMatch) -> Option<usize> {
        grouped
            .slots
            .iter()
            .position(|s| s.label == self.slot)
            .or_else(|| {
                self.slot
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=grouped.slot_count()).contains(n))
                    .map(|n| n - 1)
            })
    }
}

pub fn run(board_path: &Path, raid: Option<&str>, picks: &[Pick]) -> Result<()> {
    let board = super::load_board(board_path)?;
    let grouped = super::select_match(&board, raid)?;
    let text = share_text(grouped, picks)?;
    println!("{text}");
    Ok(())
}

/// Applies `picks` to a fresh selection and formats the share text.
fn share_text(grouped: &GroupedMatch, picks: &[Pick]) -> Result<String> {
    let mut store = SelectionStore::for_match(grouped);

    for pick in picks {
        let slot = pick.resolve_slot(grouped).with_context(|| {
            format!("Raid '{}' has no slot '{}'", grouped.raid_id, pick.slot)
        })?;
        if !store.get(slot).is_empty() {
            bail!("Slot '{}' picked more than once", grouped.slots[slot].label);
        }
        let position = grouped.slots[slot]
            .find(&pick.name, pick.server.as_deref())
            .with_context(|| {
                format!(
                    "Slot '{}' has no candidate '{}'",
                    grouped.slots[slot].label, pick.name
                )
            })?;
        let candidate = &grouped.slots[slot].candidates[position];
        store.try_toggle(grouped, slot, candidate)?;
    }

    let aggregate = summarize(store.iter_selected(grouped).map(|(_, c)| c))
        .context("Nothing selected")?;
    tracing::debug!(
        raid_id = %grouped.raid_id,
        selected = store.selected_count(),
        average = aggregate.average_power,
        "share text built"
    );
    format_share(grouped, &store, &aggregate).context("Nothing selected")
}
