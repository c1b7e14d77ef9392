//! Per-slot selection state.
//!
//! Holds exactly one entry per slot. An entry is either empty or the position
//! of one candidate in that slot's pool, so a selection can never point at a
//! candidate from another slot.

use std::fmt;

use crate::model::{Candidate, GroupedMatch};

/// Selection state of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotSelection {
    #[default]
    Empty,
    /// Position in the slot's candidate list.
    Selected(usize),
}

impl SlotSelection {
    pub fn index(self) -> Option<usize> {
        match self {
            SlotSelection::Empty => None,
            SlotSelection::Selected(idx) => Some(idx),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, SlotSelection::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The candidate is not in the claimed slot's pool, or the slot does not exist.
    InvalidSlotReference { slot: usize, candidate: String },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::InvalidSlotReference { slot, candidate } => {
                write!(f, "Candidate {candidate} is not in slot {slot}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Owns the selection vector for one grouped match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    entries: Vec<SlotSelection>,
}

impl SelectionStore {
    /// Creates an all-empty store with one entry per slot.
    pub fn new(slot_count: usize) -> Self {
        Self {
            entries: vec![SlotSelection::Empty; slot_count],
        }
    }

    pub fn for_match(grouped: &GroupedMatch) -> Self {
        Self::new(grouped.slot_count())
    }

    /// Toggles `candidate` in `slot`.
    ///
    /// Deselects when the slot already holds the same identity, otherwise
    /// selects it and replaces whatever was there. A candidate that does not
    /// belong to the slot is a caller bug: it trips a debug assertion and is
    /// ignored in release builds.
    pub fn toggle(&mut self, grouped: &GroupedMatch, slot: usize, candidate: &Candidate) {
        if let Err(err) = self.try_toggle(grouped, slot, candidate) {
            tracing::error!(%err, "ignoring toggle with invalid slot reference");
            debug_assert!(false, "{err}");
        }
    }

    /// Checked variant of [`toggle`](Self::toggle).
    pub fn try_toggle(
        &mut self,
        grouped: &GroupedMatch,
        slot: usize,
        candidate: &Candidate,
    ) -> Result<(), SelectionError> {
        let position = grouped
            .slots
            .get(slot)
            .filter(|_| slot < self.entries.len())
            .and_then(|s| s.position_of(candidate))
            .ok_or_else(|| SelectionError::InvalidSlotReference {
                slot,
                candidate: candidate.id().to_string(),
            })?;
        self.toggle_index(slot, position);
        Ok(())
    }

    /// Toggles by position. Callers guarantee both indices are in range.
    pub fn toggle_index(&mut self, slot: usize, position: usize) {
        let entry = &mut self.entries[slot];
        *entry = if *entry == SlotSelection::Selected(position) {
            SlotSelection::Empty
        } else {
            SlotSelection::Selected(position)
        };
        tracing::debug!(slot, position, selected = !entry.is_empty(), "selection toggled");
    }

    /// Clears every slot.
    pub fn reset_all(&mut self) {
        self.entries.fill(SlotSelection::Empty);
    }

    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, slot: usize) -> SlotSelection {
        self.entries.get(slot).copied().unwrap_or_default()
    }

    /// Selected candidate of `slot`, resolved against the match.
    pub fn selected<'a>(&self, grouped: &'a GroupedMatch, slot: usize) -> Option<&'a Candidate> {
        let idx = self.get(slot).index()?;
        grouped.slots.get(slot)?.candidates.get(idx)
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }

    pub fn has_selection(&self) -> bool {
        self.entries.iter().any(|e| !e.is_empty())
    }

    /// Selected candidates in slot order, paired with their slot index.
    pub fn iter_selected<'a>(
        &'a self,
        grouped: &'a GroupedMatch,
    ) -> impl Iterator<Item = (usize, &'a Candidate)> + 'a {
        self.entries
            .iter()
            .enumerate()
            .filter_map(move |(slot, entry)| {
                let idx = entry.index()?;
                grouped
                    .slots
                    .get(slot)
                    .and_then(|s| s.candidates.get(idx))
                    .map(|c| (slot, c))
            })
    }

    /// True when a candidate with the same identity is selected in a slot other than `slot`.
    pub fn is_selected_elsewhere(
        &self,
        grouped: &GroupedMatch,
        slot: usize,
        candidate: &Candidate,
    ) -> bool {
        self.iter_selected(grouped)
            .any(|(other, c)| other != slot && c.same_identity(candidate))
    }
}
