//! Card key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::card::{CardState, Focus};
use crate::effects::UiEffect;
use crate::share;

/// Handles a key aimed at the active card.
pub fn handle_key(card: &mut CardState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            card.move_row(-1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            card.move_row(1);
            vec![]
        }
        KeyCode::Left | KeyCode::Char('h') => {
            card.move_slot(-1);
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            card.move_slot(1);
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            activate(card);
            vec![]
        }
        KeyCode::Char('e') => {
            let slot = card.cursor.slot;
            card.toggle_expand(slot);
            vec![]
        }
        KeyCode::Char('s' | 'y') => share::share(card),
        _ => vec![],
    }
}

/// Presses whatever is under the cursor.
fn activate(card: &mut CardState) {
    let slot = card.cursor.slot;
    match card.focused() {
        Some(Focus::Candidate(position)) => card.toggle(slot, position),
        Some(Focus::ExpandControl) => card.toggle_expand(slot),
        None => {}
    }
}
