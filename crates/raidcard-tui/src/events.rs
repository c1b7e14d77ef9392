//! UI event types.
//!
//! All external inputs (terminal, clipboard results, timers) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async work sends its result straight to the runtime's inbox channel. The
//! runtime drains the inbox each loop iteration and feeds the reducer.

use crossterm::event::Event as CrosstermEvent;

use crate::common::{ClipboardError, TaskId};

#[derive(Debug)]
pub enum UiEvent {
    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// A share write finished.
    ClipboardResult {
        raid_id: String,
        result: Result<(), ClipboardError>,
    },

    /// The copy feedback timer of a card elapsed.
    FeedbackExpired { raid_id: String, id: TaskId },
}
