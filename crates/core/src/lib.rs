//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is plain data and pure rules. There is no I/O, no clock
//! and no global state: the tick loop drives a [`GameSession`] by calling
//! [`GameSession::apply_action`] and [`GameSession::tick`], and reads frames
//! back with [`GameSession::snapshot_into`].
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 grid of locked cells and line clearing
//! - [`pieces`]: shape catalog and clockwise rotation
//! - [`placement`]: the single legality test and lock-in
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line-clear points, level and gravity speed
//! - [`session`]: the Playing / Paused / GameOver state machine
//! - [`snapshot`]: copyable view for renderers
//!
//! # Game Rules
//!
//! - **Random pieces**: each spawn is an independent uniform draw
//! - **Rotation**: clockwise only, about the bounding box, no wall kicks
//! - **Gravity**: one row every `max(1, 20 - level)` ticks
//! - **Locking**: immediate when a piece cannot move down (no lock delay)
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 lines, level every 1000 points
//! - **Game over**: a blocked spawn, or any locked cell in the top row
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{GameSession, Phase};
//! use term_tetris_types::GameAction;
//!
//! let mut game = GameSession::new(12345);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The piece landed and a new one spawned.
//! assert_eq!(game.field().occupied_count(), 4);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod field;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use field::{ClearedRows, ColorGrid, Field, FIELD_ROWS};
pub use pieces::{shape_of, ActivePiece, PieceShape};
pub use placement::{can_place, drop_distance, lock_in};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ticks, level_for_score, line_clear_score};
pub use session::{GameSession, LockEvent, Phase};
pub use snapshot::GameSnapshot;
