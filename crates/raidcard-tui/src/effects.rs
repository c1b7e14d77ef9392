//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided token.
//! The reducer decides when to cancel, the runtime executes.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Write share text to the clipboard.
    CopyToClipboard { raid_id: String, text: String },

    /// Start the timer that reverts a card's copy feedback.
    StartFeedbackTimer {
        raid_id: String,
        id: TaskId,
        token: CancellationToken,
        after: Duration,
    },

    /// Cancel an in-progress task.
    CancelTask { token: CancellationToken },
}
