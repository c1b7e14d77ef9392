//! Effect handlers.
//!
//! Each handler is a plain async function that performs the I/O and returns
//! the event to feed back into the reducer. Spawning is the runtime's job.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::common::{Clipboard, ClipboardError, TaskId};
use crate::events::UiEvent;

/// Writes `text` to the clipboard off the async workers.
pub async fn copy_to_clipboard(raid_id: String, text: String) -> UiEvent {
    let result = tokio::task::spawn_blocking(move || Clipboard::copy(&text))
        .await
        .unwrap_or_else(|err| Err(ClipboardError::System(format!("clipboard task failed: {err}"))));
    UiEvent::ClipboardResult { raid_id, result }
}

/// Waits `after`, then reports the feedback timer as expired.
///
/// Returns `None` when the token is cancelled first; a cancelled timer never
/// reaches the reducer.
pub async fn feedback_timer(
    raid_id: String,
    id: TaskId,
    token: CancellationToken,
    after: Duration,
) -> Option<UiEvent> {
    tokio::select! {
        () = token.cancelled() => {
            tracing::trace!(raid_id, ?id, "feedback timer cancelled");
            None
        }
        () = tokio::time::sleep(after) => Some(UiEvent::FeedbackExpired { raid_id, id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_feedback_timer_fires_after_duration() {
        let token = CancellationToken::new();
        let event = feedback_timer("r".to_string(), TaskId(7), token, Duration::from_secs(2)).await;
        assert!(matches!(
            event,
            Some(UiEvent::FeedbackExpired { raid_id, id }) if raid_id == "r" && id == TaskId(7)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_yields_nothing() {
        let token = CancellationToken::new();
        let handle = tokio::spawn(feedback_timer(
            "r".to_string(),
            TaskId(1),
            token.clone(),
            Duration::from_secs(2),
        ));
        tokio::time::sleep(Duration::from_millis(500)).await;
        token.cancel();
        assert!(handle.await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_shutdown_cancels_child_timer() {
        let shutdown = CancellationToken::new();
        let child = shutdown.child_token();
        shutdown.cancel();
        let event = feedback_timer("r".to_string(), TaskId(2), child, Duration::from_secs(2)).await;
        assert!(event.is_none());
    }
}
