//! Share reducer helpers.
//!
//! Share reads the active card, hands the text to the clipboard effect, and
//! turns the clipboard result into transient feedback with a revert timer.

use crate::card::CardState;
use crate::common::{ClipboardError, TaskId};
use crate::effects::UiEffect;
use crate::share::CopyStatus;
use crate::state::AppState;

/// Builds the clipboard effect for `card`. Empty when nothing is selected.
pub fn share(card: &CardState) -> Vec<UiEffect> {
    match card.share_text() {
        Some(text) => vec![UiEffect::CopyToClipboard {
            raid_id: card.raid_id().to_string(),
            text,
        }],
        None => {
            tracing::debug!(raid_id = card.raid_id(), "share ignored, nothing selected");
            vec![]
        }
    }
}

/// Applies a finished clipboard write to the card it came from.
///
/// Either outcome shows transient feedback and (re)starts the card's revert
/// timer, cancelling the one it replaces.
pub fn handle_clipboard_result(
    app: &mut AppState,
    raid_id: &str,
    result: Result<(), ClipboardError>,
) -> Vec<UiEffect> {
    let id = app.task_seq.next_id();
    let token = app.shutdown.child_token();
    let after = app.feedback_duration;

    let Some(card) = app.card_mut(raid_id) else {
        return vec![];
    };

    card.copy.status = match result {
        Ok(()) => {
            tracing::info!(raid_id, "party copied to clipboard");
            CopyStatus::Copied
        }
        Err(err) => {
            tracing::warn!(raid_id, %err, "failed to copy party to clipboard");
            CopyStatus::Failed
        }
    };

    let mut effects = Vec::new();
    if let Some(previous) = card.copy.timer.replace(id, token.clone()) {
        effects.push(UiEffect::CancelTask { token: previous });
    }
    effects.push(UiEffect::StartFeedbackTimer {
        raid_id: raid_id.to_string(),
        id,
        token,
        after,
    });
    effects
}

/// Reverts feedback when the active timer of the card fires. Stale timers are ignored.
pub fn handle_feedback_expired(app: &mut AppState, raid_id: &str, id: TaskId) -> Vec<UiEffect> {
    if let Some(card) = app.card_mut(raid_id)
        && card.copy.timer.finish_if_active(id)
    {
        card.copy.status = CopyStatus::Idle;
    }
    vec![]
}

/// Cancels every pending feedback timer.
pub fn cancel_all_timers(app: &mut AppState) -> Vec<UiEffect> {
    app.cards
        .iter_mut()
        .filter_map(|card| card.copy.timer.take())
        .map(|token| UiEffect::CancelTask { token })
        .collect()
}
