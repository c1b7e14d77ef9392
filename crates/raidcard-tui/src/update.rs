//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{card, share};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::ClipboardResult { raid_id, result } => {
            share::handle_clipboard_result(app, &raid_id, result)
        }
        UiEvent::FeedbackExpired { raid_id, id } => {
            share::handle_feedback_expired(app, &raid_id, id)
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => quit(app),
        KeyCode::Char('q') | KeyCode::Esc => quit(app),
        KeyCode::Tab => {
            app.cycle_card(true);
            vec![]
        }
        KeyCode::BackTab => {
            app.cycle_card(false);
            vec![]
        }
        KeyCode::Char('r') => {
            let Some(raid_id) = app.active_card().map(|c| c.raid_id().to_string()) else {
                return vec![];
            };
            reset_all(app, &raid_id)
        }
        _ => match app.active_card_mut() {
            Some(card) => card::handle_key(card, key),
            None => vec![],
        },
    }
}

/// Clears every selection and expand flag of the card for `raid_id`.
pub fn reset_all(app: &mut AppState, raid_id: &str) -> Vec<UiEffect> {
    if let Some(card) = app.card_mut(raid_id) {
        card.reset_all();
        tracing::debug!(raid_id, "card reset");
    }
    vec![]
}

/// Tears down pending timers and asks the runtime to stop.
fn quit(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = share::cancel_all_timers(app);
    effects.push(UiEffect::Quit);
    effects
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use raidcard_core::MatchBoard;
    use raidcard_core::config::Config;

    use super::*;
    use crate::card::state::tests::sample_match;
    use crate::common::ClipboardError;
    use crate::share::CopyStatus;

    fn app() -> AppState {
        let board = MatchBoard {
            matches: vec![sample_match("first"), sample_match("second")],
        };
        AppState::new(board, &Config::default())
    }

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn copied(raid_id: &str) -> UiEvent {
        UiEvent::ClipboardResult {
            raid_id: raid_id.to_string(),
            result: Ok(()),
        }
    }

    fn timer_id(effects: &[UiEffect]) -> crate::common::TaskId {
        effects
            .iter()
            .find_map(|e| match e {
                UiEffect::StartFeedbackTimer { id, .. } => Some(*id),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_share_with_nothing_selected_is_noop() {
        let mut app = app();
        assert!(update(&mut app, press(KeyCode::Char('s'))).is_empty());
    }

    #[test]
    fn test_copy_success_shows_copied_and_starts_timer() {
        let mut app = app();
        let effects = update(&mut app, copied("first"));

        assert!(app.cards[0].copy.is_copied());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::StartFeedbackTimer { raid_id, after, .. }]
                if raid_id == "first" && after.as_millis() == 2000
        ));
    }

    #[test]
    fn test_copy_failure_leaves_copied_false() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::ClipboardResult {
                raid_id: "first".to_string(),
                result: Err(ClipboardError::System("no display".to_string())),
            },
        );

        assert!(!app.cards[0].copy.is_copied());
        assert_eq!(app.cards[0].copy.status, CopyStatus::Failed);
        assert!(!app.should_quit);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_new_copy_cancels_previous_timer_and_stale_expiry_ignored() {
        let mut app = app();
        let first = timer_id(&update(&mut app, copied("first")));
        let effects = update(&mut app, copied("first"));
        let second = timer_id(&effects);

        let cancelled = effects
            .iter()
            .find_map(|e| match e {
                UiEffect::CancelTask { token } => Some(token.clone()),
                _ => None,
            })
            .unwrap();
        cancelled.cancel();

        update(
            &mut app,
            UiEvent::FeedbackExpired {
                raid_id: "first".to_string(),
                id: first,
            },
        );
        assert!(app.cards[0].copy.is_copied());

        update(
            &mut app,
            UiEvent::FeedbackExpired {
                raid_id: "first".to_string(),
                id: second,
            },
        );
        assert_eq!(app.cards[0].copy.status, CopyStatus::Idle);
    }

    #[test]
    fn test_feedback_is_per_card() {
        let mut app = app();
        update(&mut app, copied("second"));
        assert!(!app.cards[0].copy.is_copied());
        assert!(app.cards[1].copy.is_copied());
    }

    #[test]
    fn test_quit_cancels_pending_timers() {
        let mut app = app();
        update(&mut app, copied("first"));
        let effects = update(&mut app, press(KeyCode::Char('q')));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask { .. }, UiEffect::Quit]
        ));
        assert!(!app.cards[0].copy.timer.is_running());
    }

    #[test]
    fn test_reset_only_touches_active_raid() {
        let mut app = app();
        update(&mut app, press(KeyCode::Enter));
        update(&mut app, press(KeyCode::Tab));
        update(&mut app, press(KeyCode::Enter));
        assert_eq!(app.cards[1].selections.selected_count(), 1);

        update(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.cards[1].selections.selected_count(), 0);
        assert_eq!(app.cards[0].selections.selected_count(), 1);
    }

    #[test]
    fn test_reset_collapses_expanded_slots() {
        let mut app = app();
        update(&mut app, press(KeyCode::Char('e')));
        assert!(app.cards[0].visibility.is_expanded(0));
        // Cursor to the fifth row, which only exists while expanded.
        for _ in 0..4 {
            update(&mut app, press(KeyCode::Down));
        }
        update(&mut app, press(KeyCode::Enter));
        assert_eq!(app.cards[0].selections.get(0).index(), Some(4));

        update(&mut app, press(KeyCode::Char('r')));

        let card = &app.cards[0];
        assert!(!card.visibility.is_expanded(0));
        assert_eq!(card.selections.selected_count(), 0);
        assert_eq!(card.rows(0).rows, vec![0, 1, 2]);
        assert_eq!(card.rows(0).hidden_count, 2);
        assert_eq!(card.focused(), Some(crate::card::Focus::ExpandControl));
    }

    #[test]
    fn test_shared_text_reflects_selection() {
        let mut app = app();
        update(&mut app, press(KeyCode::Enter));
        let effects = update(&mut app, press(KeyCode::Char('s')));
        let [UiEffect::CopyToClipboard { raid_id, text }] = effects.as_slice() else {
            panic!("expected a clipboard effect, got {effects:?}");
        };
        assert_eq!(raid_id, "first");
        assert_eq!(
            text,
            "[카제로스 1막] 노말 - 평균 1,000.00\n1. ⚔️ a0 (소서리스) 1,000.00 [치명타 피해]"
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut app = app();
        let event = UiEvent::Terminal(Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
        update(&mut app, event);
        assert_eq!(app.cards[0].selections.selected_count(), 0);
    }
}
