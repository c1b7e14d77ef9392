//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each iteration to collect results
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Effect handler implementations (clipboard, timers)

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use raidcard_core::MatchBoard;
use raidcard_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// How long to block on terminal input when nothing is queued.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each iteration.
    inbox_rx: UiEventReceiver,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// Must be called inside a tokio runtime; effects are spawned onto it.
    pub fn new(board: MatchBoard, config: &Config) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(board, config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Runs the main event loop until the reducer asks to quit.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        // Nothing may fire into a torn-down display.
        self.state.shutdown.cancel();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;
            if !events.is_empty() {
                dirty = true;
            }

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the inbox and the terminal.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Don't delay queued results behind a blocking poll.
        let poll_duration = if events.is_empty() {
            IDLE_POLL_DURATION
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect and sends its result event, if any, to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Option<UiEvent>> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            if let Some(ev) = f().await {
                let _ = tx.send(ev);
            }
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::CopyToClipboard { raid_id, text } => {
                self.spawn_effect(move || async move {
                    Some(handlers::copy_to_clipboard(raid_id, text).await)
                });
            }
            UiEffect::StartFeedbackTimer {
                raid_id,
                id,
                token,
                after,
            } => {
                self.spawn_effect(move || handlers::feedback_timer(raid_id, id, token, after));
            }
            UiEffect::CancelTask { token } => {
                token.cancel();
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        self.state.shutdown.cancel();
        let _ = terminal::restore_terminal();
    }
}
