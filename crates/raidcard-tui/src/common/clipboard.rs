//! Clipboard access for share text.
//!
//! Transports, in order:
//! 1. OSC 52 escape sequence written to the terminal (works over SSH, and the
//!    terminal keeps the contents after we exit)
//! 2. System clipboard via `arboard`

use std::io::{self, Write};

use base64::Engine;

/// Clipboard interface with multiple transport fallbacks.
pub struct Clipboard;

impl Clipboard {
    /// Copies text to the clipboard.
    ///
    /// Returns `Ok(())` if any transport accepted the text.
    pub fn copy(text: &str) -> Result<(), ClipboardError> {
        Self::copy_via(text, &mut io::stdout(), Self::copy_system)
    }

    /// OSC 52 to `terminal`, then `fallback` if the terminal write fails.
    fn copy_via<W, F>(text: &str, terminal: &mut W, fallback: F) -> Result<(), ClipboardError>
    where
        W: Write,
        F: FnOnce(&str) -> Result<(), ClipboardError>,
    {
        match write_osc52(terminal, text) {
            Ok(()) => Ok(()),
            Err(osc_err) => {
                tracing::debug!(%osc_err, "OSC 52 write failed, trying system clipboard");
                fallback(text)
            }
        }
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .map_err(|e| ClipboardError::System(e.to_string()))
    }
}

/// `ESC ] 52 ; c ; <base64> ESC \` selecting the system clipboard.
fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x1b\\")
}

fn write_osc52<W: Write>(terminal: &mut W, text: &str) -> Result<(), ClipboardError> {
    terminal
        .write_all(osc52_sequence(text).as_bytes())
        .and_then(|()| terminal.flush())
        .map_err(|e| ClipboardError::Osc52(e.to_string()))
}

/// Clipboard operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// OSC 52 write failed.
    Osc52(String),
    /// System clipboard operation failed.
    System(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Osc52(msg) => write!(f, "OSC 52 clipboard failed: {msg}"),
            ClipboardError::System(msg) => write!(f, "System clipboard failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}
