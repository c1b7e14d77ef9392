//! Shared leaf types for TUI features.
//!
//! Contains types with no feature dependencies (clipboard, tasks, text helpers).
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod clipboard;
pub mod task;
pub mod text;

pub use clipboard::{Clipboard, ClipboardError};
pub use task::{TaskId, TaskSeq, TaskState};
pub use text::{fit_to_width, truncate_with_ellipsis};
