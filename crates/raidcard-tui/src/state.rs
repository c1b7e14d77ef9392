//! Application state composition.
//!
//! ```text
//! AppState
//! ├── cards: Vec<CardState>      (one per grouped match, board order)
//! │   ├── grouped: GroupedMatch  (read-only)
//! │   ├── selections: SelectionStore
//! │   ├── visibility: VisibilityController
//! │   ├── cursor: Cursor
//! │   └── copy: CopyFeedback     (transient share feedback + timer)
//! ├── active: usize              (card shown on screen)
//! ├── task_seq: TaskSeq          (timer id generator)
//! └── shutdown: CancellationToken (parent of every timer token)
//! ```

use std::time::Duration;

use raidcard_core::MatchBoard;
use raidcard_core::config::Config;
use tokio_util::sync::CancellationToken;

use crate::card::CardState;
use crate::common::TaskSeq;

pub struct AppState {
    pub cards: Vec<CardState>,
    pub active: usize,
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub task_seq: TaskSeq,
    /// How long copy feedback stays visible.
    pub feedback_duration: Duration,
    /// Cancelled on teardown so no timer outlives the display.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(board: MatchBoard, config: &Config) -> Self {
        let page_size = config.effective_page_size();
        Self {
            cards: board
                .matches
                .into_iter()
                .map(|grouped| CardState::new(grouped, page_size))
                .collect(),
            active: 0,
            should_quit: false,
            task_seq: TaskSeq::default(),
            feedback_duration: config.copied_feedback(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn active_card(&self) -> Option<&CardState> {
        self.cards.get(self.active)
    }

    pub fn active_card_mut(&mut self) -> Option<&mut CardState> {
        self.cards.get_mut(self.active)
    }

    pub fn card_mut(&mut self, raid_id: &str) -> Option<&mut CardState> {
        self.cards.iter_mut().find(|c| c.raid_id() == raid_id)
    }

    /// Moves to the next (or previous) card, wrapping around.
    pub fn cycle_card(&mut self, forward: bool) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
    }
}
