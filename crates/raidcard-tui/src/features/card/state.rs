//! Raid card state: one grouped match plus everything the operator has done to it.

use raidcard_core::{
    DisplayAggregate, GroupedMatch, SelectionStore, VisibilityController, VisibleRows,
    format_share,
};

use crate::share::CopyFeedback;

/// A focusable item inside a slot column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Position in the slot's candidate list.
    Candidate(usize),
    /// The "show more" / "collapse" control.
    ExpandControl,
}

/// Cursor position inside a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub slot: usize,
    /// Index into [`CardState::focus_items`] for `slot`.
    pub row: usize,
}

pub struct CardState {
    pub grouped: GroupedMatch,
    pub selections: SelectionStore,
    pub visibility: VisibilityController,
    pub cursor: Cursor,
    pub copy: CopyFeedback,
}

impl CardState {
    pub fn new(grouped: GroupedMatch, page_size: usize) -> Self {
        let selections = SelectionStore::for_match(&grouped);
        let mut card = Self {
            grouped,
            selections,
            visibility: VisibilityController::new(page_size),
            cursor: Cursor::default(),
            copy: CopyFeedback::default(),
        };
        if let Some(slot) = card.first_slot() {
            card.cursor.slot = slot;
        }
        card
    }

    pub fn raid_id(&self) -> &str {
        &self.grouped.raid_id
    }

    /// Rows currently visible in `slot`.
    pub fn rows(&self, slot: usize) -> VisibleRows {
        self.grouped
            .slots
            .get(slot)
            .map(|s| self.visibility.rows_for(slot, s, self.selections.get(slot)))
            .unwrap_or_default()
    }

    /// Focusable items of `slot` in render order.
    pub fn focus_items(&self, slot: usize) -> Vec<Focus> {
        let rows = self.rows(slot);
        let mut items: Vec<Focus> = rows.rows.iter().map(|&i| Focus::Candidate(i)).collect();
        if rows.has_more {
            items.push(Focus::ExpandControl);
        }
        items
    }

    /// Item under the cursor.
    pub fn focused(&self) -> Option<Focus> {
        self.focus_items(self.cursor.slot)
            .get(self.cursor.row)
            .copied()
    }

    /// Slots that have candidates; empty slots are neither rendered nor focusable.
    pub fn rendered_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.grouped
            .slots
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_empty())
            .map(|(i, _)| i)
    }

    fn first_slot(&self) -> Option<usize> {
        self.rendered_slots().next()
    }

    pub fn aggregate(&self) -> DisplayAggregate {
        DisplayAggregate::resolve(&self.grouped, &self.selections)
    }

    /// Share text for the current picks, `None` when nothing is picked.
    pub fn share_text(&self) -> Option<String> {
        let aggregate = self.aggregate();
        if !aggregate.is_from_selection() {
            return None;
        }
        format_share(&self.grouped, &self.selections, &aggregate.aggregate)
    }

    /// Toggles the candidate at `position` in `slot`.
    pub fn toggle(&mut self, slot: usize, position: usize) {
        let Some(candidate) = self
            .grouped
            .slots
            .get(slot)
            .and_then(|s| s.candidates.get(position))
        else {
            return;
        };
        self.selections.toggle(&self.grouped, slot, candidate);
        self.clamp_cursor();
    }

    pub fn toggle_expand(&mut self, slot: usize) {
        let was_expanded = self.visibility.is_expanded(slot);
        self.visibility.toggle_expand(slot);
        if was_expanded && self.cursor.slot == slot {
            // Keep the cursor on the control that was just pressed.
            self.cursor.row = self.focus_items(slot).len().saturating_sub(1);
        }
        self.clamp_cursor();
    }

    /// Clears every selection and collapses every slot.
    pub fn reset_all(&mut self) {
        self.selections.reset_all();
        self.visibility.reset();
        self.clamp_cursor();
    }

    pub fn move_row(&mut self, delta: isize) {
        let len = self.focus_items(self.cursor.slot).len();
        if len == 0 {
            return;
        }
        self.cursor.row = self.cursor.row.saturating_add_signed(delta).min(len - 1);
    }

    pub fn move_slot(&mut self, delta: isize) {
        let slots: Vec<usize> = self.rendered_slots().collect();
        let Some(current) = slots.iter().position(|&s| s == self.cursor.slot) else {
            return;
        };
        let target = current.saturating_add_signed(delta).min(slots.len() - 1);
        if target != current {
            self.cursor.slot = slots[target];
            self.clamp_cursor();
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.focus_items(self.cursor.slot).len();
        self.cursor.row = self.cursor.row.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use raidcard_core::{Candidate, Role, Slot};

    use super::*;

    pub fn candidate(name: &str, role: Role, power: f64) -> Candidate {
        Candidate {
            name: name.to_string(),
            server: "아브렐슈드".to_string(),
            role,
            power,
            class_name: "소서리스".to_string(),
            synergy: Some("치명타 피해".to_string()),
            ark_passive: None,
            item_level: "1,680.00".to_string(),
        }
    }

    /// Slots: five dealers, an empty slot, one support.
    pub fn sample_match(raid_id: &str) -> GroupedMatch {
        GroupedMatch {
            raid_id: raid_id.to_string(),
            raid_name: "카제로스 1막".to_string(),
            difficulty: "노말".to_string(),
            level: 1660,
            slots: vec![
                Slot {
                    label: "alpha".to_string(),
                    candidates: (0..5)
                        .map(|i| candidate(&format!("a{i}"), Role::Damage, 1000.0 + f64::from(i)))
                        .collect(),
                },
                Slot {
                    label: "ghost".to_string(),
                    candidates: vec![],
                },
                Slot {
                    label: "gamma".to_string(),
                    candidates: vec![candidate("g0", Role::Support, 900.0)],
                },
            ],
            average_power: 1111.0,
            dealer_count: 5,
            support_count: 1,
        }
    }

    #[test]
    fn test_focus_items_include_control_when_long() {
        let card = CardState::new(sample_match("r"), 3);
        assert_eq!(
            card.focus_items(0),
            vec![
                Focus::Candidate(0),
                Focus::Candidate(1),
                Focus::Candidate(2),
                Focus::ExpandControl
            ]
        );
        assert_eq!(card.focus_items(2), vec![Focus::Candidate(0)]);
    }

    #[test]
    fn test_move_slot_skips_empty_slots() {
        let mut card = CardState::new(sample_match("r"), 3);
        card.move_slot(1);
        assert_eq!(card.cursor.slot, 2);
        card.move_slot(1);
        assert_eq!(card.cursor.slot, 2);
        card.move_slot(-1);
        assert_eq!(card.cursor.slot, 0);
    }

    #[test]
    fn test_collapse_keeps_selection_and_pins_it() {
        let mut card = CardState::new(sample_match("r"), 3);
        card.toggle_expand(0);
        card.toggle(0, 4);
        card.toggle_expand(0);

        assert!(!card.visibility.is_expanded(0));
        assert_eq!(card.selections.get(0).index(), Some(4));
        assert_eq!(card.rows(0).rows, vec![0, 1, 2, 4]);
        assert_eq!(card.focused(), Some(Focus::ExpandControl));
    }

    #[test]
    fn test_share_text_none_without_selection() {
        let mut card = CardState::new(sample_match("r"), 3);
        assert_eq!(card.share_text(), None);
        card.toggle(2, 0);
        let text = card.share_text().unwrap();
        assert!(text.starts_with("[카제로스 1막] 노말 - 평균 900.00"));
        assert!(text.ends_with("1. 🛡️ g0 (소서리스) 900.00"));
    }

    #[test]
    fn test_cursor_clamped_when_pinned_row_disappears() {
        let mut card = CardState::new(sample_match("r"), 3);
        card.toggle_expand(0);
        card.toggle(0, 4);
        card.toggle_expand(0);
        card.cursor.row = 3;
        assert_eq!(card.focused(), Some(Focus::Candidate(4)));

        card.toggle(0, 4);
        assert_eq!(card.focus_items(0).len(), 4);
        assert_eq!(card.focused(), Some(Focus::ExpandControl));
    }
}
