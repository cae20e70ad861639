//! Non-blocking terminal input source.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use term_tetris_engine::InputSource;

use crate::map::handle_key_event;
use crate::types::{GameAction, InputMode};

/// Reads at most one crossterm event per poll and never waits.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_action(&mut self, mode: InputMode) -> Result<Option<GameAction>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let ev = event::read()?;
        Ok(action_for_event(&ev, mode))
    }
}

/// Action for one terminal event. Key releases, mouse, resize and focus
/// events map to nothing.
pub fn action_for_event(ev: &Event, mode: InputMode) -> Option<GameAction> {
    match ev {
        // Auto-repeat counts as a fresh press.
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(*key, mode),
        _ => None,
    }
}
