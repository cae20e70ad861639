//! Terminal input adapter.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] for the
//! current input mode and exposes a non-blocking [`TerminalInput`] source for
//! the tick loop. Input is one key per poll; there is no key-repeat handling
//! beyond what the terminal itself sends.

pub mod map;
pub mod poll;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use poll::{action_for_event, TerminalInput};
