//! Bounded candidate lists.
//!
//! A collapsed slot shows its first page of candidates. If the selected
//! candidate sits beyond that page it is pinned to the end of the visible
//! rows, and the "show more" count shrinks by one so it always equals the
//! number of rows a full expand would add.

use std::collections::HashMap;

use crate::model::Slot;
use crate::selection::SlotSelection;

/// Number of candidates shown before a slot is expanded.
pub const INITIAL_PAGE_SIZE: usize = 3;

/// Rows to render for one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRows {
    /// Positions into the slot's candidate list, in render order.
    pub rows: Vec<usize>,
    /// How many candidates a full expand would additionally reveal.
    pub hidden_count: usize,
    /// Whether the slot is long enough to need an expand/collapse control.
    pub has_more: bool,
}

/// Where the selection sits relative to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pin {
    Absent,
    Within,
    Beyond(usize),
}

impl Pin {
    fn classify(selected: SlotSelection, page_size: usize, total: usize) -> Self {
        match selected.index() {
            Some(idx) if idx >= total => Pin::Absent,
            Some(idx) if idx >= page_size => Pin::Beyond(idx),
            Some(_) => Pin::Within,
            None => Pin::Absent,
        }
    }
}

/// Per-slot expand state plus the row policy.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    page_size: usize,
    /// Absent means collapsed.
    expanded: HashMap<usize, bool>,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(INITIAL_PAGE_SIZE)
    }
}

impl VisibilityController {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            expanded: HashMap::new(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_expanded(&self, slot: usize) -> bool {
        self.expanded.get(&slot).copied().unwrap_or(false)
    }

    /// Flips the expand flag of `slot`. Selections are untouched.
    pub fn toggle_expand(&mut self, slot: usize) {
        let flag = self.expanded.entry(slot).or_insert(false);
        *flag = !*flag;
    }

    /// Collapses every slot.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    /// Rows for `slot` under its current expand state.
    pub fn rows_for(&self, slot_index: usize, slot: &Slot, selected: SlotSelection) -> VisibleRows {
        visible_rows(slot, self.is_expanded(slot_index), selected, self.page_size)
    }
}

/// Computes the visible rows of a slot.
pub fn visible_rows(
    slot: &Slot,
    is_expanded: bool,
    selected: SlotSelection,
    page_size: usize,
) -> VisibleRows {
    let total = slot.len();
    let has_more = total > page_size;

    if !has_more || is_expanded {
        return VisibleRows {
            rows: (0..total).collect(),
            hidden_count: 0,
            has_more,
        };
    }

    let mut rows: Vec<usize> = (0..page_size).collect();
    let hidden_count = match Pin::classify(selected, page_size, total) {
        Pin::Absent | Pin::Within => total - page_size,
        Pin::Beyond(idx) => {
            rows.push(idx);
            total - page_size - 1
        }
    };

    VisibleRows {
        rows,
        hidden_count,
        has_more,
    }
}
