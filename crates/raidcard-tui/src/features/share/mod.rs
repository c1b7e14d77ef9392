//! Share feature: clipboard export of the current party and its transient feedback.

mod state;
mod update;

pub use state::{CopyFeedback, CopyStatus};
pub use update::{cancel_all_timers, handle_clipboard_result, handle_feedback_expired, share};
