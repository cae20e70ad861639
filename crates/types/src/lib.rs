//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types shared by the game core, the tick
//! loop and the terminal adapters. Nothing here has behavior beyond small
//! conversions, so every other crate can depend on it.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (`FIELD_WIDTH / 2`, 0) = (5, 0), the top-left corner of
//!   the piece's bounding box
//!
//! # Timing
//!
//! The game runs a fixed-period loop. Gravity is counted in ticks, not
//! milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Sleep between two ticks |
//! | `BASE_DROP_TICKS` | 20 | Gravity threshold before level is subtracted |
//! | `MIN_DROP_TICKS` | 1 | Lower clamp on the gravity threshold |
//!
//! The threshold at a given level is `max(MIN_DROP_TICKS, BASE_DROP_TICKS - level)`.
//!
//! # Scoring
//!
//! | Lines | Points |
//! |-------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! Level is `1 + score / POINTS_PER_LEVEL`.
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PauseItem, PieceKind, FIELD_HEIGHT, FIELD_WIDTH, SPAWN_X};
//!
//! assert_eq!(PieceKind::T.color_tag(), 3);
//! assert_eq!(PieceKind::from_color_tag(7), Some(PieceKind::L));
//!
//! // The pause menu wraps around in both directions.
//! assert_eq!(PauseItem::Continue.prev(), PauseItem::Exit);
//! assert_eq!(PauseItem::Exit.next(), PauseItem::Continue);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 5);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Spawn anchor column (integer floor of `FIELD_WIDTH / 2`)
pub const SPAWN_X: i8 = (FIELD_WIDTH / 2) as i8;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 0;

/// Fixed sleep between ticks in milliseconds
pub const TICK_MS: u32 = 50;

/// Gravity threshold in ticks before the level is subtracted
pub const BASE_DROP_TICKS: u32 = 20;

/// Gravity never waits less than this many ticks
pub const MIN_DROP_TICKS: u32 = 1;

/// Points awarded for clearing N lines with a single lock (index = N)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Score needed per level step
pub const POINTS_PER_LEVEL: u32 = 1000;

/// The seven piece kinds
///
/// Each kind carries a fixed color tag used by the field and the renderer:
/// - **I**: 1, horizontal bar
/// - **O**: 2, 2x2 square
/// - **T**: 3
/// - **S**: 4
/// - **Z**: 5 (mirror of S)
/// - **J**: 6
/// - **L**: 7 (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in color-tag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color tag in `1..=7`
    pub fn color_tag(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::color_tag`]. `0` and anything above `7` map to `None`.
    pub fn from_color_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::O.as_str(), "o");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Player intents produced by the input adapter.
///
/// Which of these are meaningful depends on the session phase; the session
/// ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise around its bounding box
    Rotate,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Drop piece until blocked and lock it
    HardDrop,
    /// Toggle the pause menu
    Pause,
    /// Pause menu cursor up
    MenuUp,
    /// Pause menu cursor down
    MenuDown,
    /// Activate the selected pause menu item
    MenuConfirm,
    /// Start a new game
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// camelCase name, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::MenuUp => "menuUp",
            GameAction::MenuDown => "menuDown",
            GameAction::MenuConfirm => "menuConfirm",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Key-mapping context. The same physical key maps to different actions
/// depending on what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Menu,
    GameOver,
}

/// Pause menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseItem {
    Continue,
    Restart,
    Exit,
}

impl PauseItem {
    pub const ALL: [PauseItem; 3] = [PauseItem::Continue, PauseItem::Restart, PauseItem::Exit];

    pub fn index(self) -> usize {
        match self {
            PauseItem::Continue => 0,
            PauseItem::Restart => 1,
            PauseItem::Exit => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next item, wrapping from the last to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous item, wrapping from the first to the last.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            PauseItem::Continue => "Continue",
            PauseItem::Restart => "Restart",
            PauseItem::Exit => "Exit",
        }
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEnd {
    /// A new piece could not be placed, or the top row filled up.
    ToppedOut,
    /// The player chose Exit from the pause menu or quit.
    Exited,
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEnd::ToppedOut => "topped_out",
            SessionEnd::Exited => "exited",
        }
    }
}
