//! Terminal display adapter.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a snapshot into
//! a [`FrameBuffer`], [`TerminalRenderer`] flushes changed cells through
//! crossterm, and [`TerminalDisplay`] ties both to the tick loop.
//!
//! - Keep `core` free of any terminal code
//! - Redraw only what changed between frames
//! - Draw field cells two columns wide to roughly square them up

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
