//! Raid card feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: `CardState` (match, selections, visibility, cursor, copy feedback)
//! - `update.rs`: key handling for the active card
//! - `render.rs`: header and slot columns

mod render;
pub(crate) mod state;
mod update;

pub use render::render_card;
pub use state::{CardState, Cursor, Focus};
pub use update::handle_key;
