//! Session module - the game state machine
//!
//! A [`GameSession`] owns the field, the falling piece, the RNG and every
//! counter. It moves between three phases:
//!
//! ```text
//!             pause                     Continue / pause
//!   Playing ---------> Paused(item) ---------------------> Playing
//!      |                  |  |
//!      |                  |  +-- Restart --> (fresh) Playing
//!      |                  +----- Exit / quit --> GameOver(Exited)
//!      +-- spawn blocked / top row filled --> GameOver(ToppedOut)
//!      +-- quit --> GameOver(Exited)
//! ```
//!
//! `GameOver` accepts no actions. Whoever drives the session decides whether
//! to call [`GameSession::restart`].

use log::{debug, info};

use crate::field::Field;
use crate::pieces::ActivePiece;
use crate::placement::{can_place, drop_distance, lock_in};
use crate::rng::SimpleRng;
use crate::scoring::{drop_interval_ticks, level_for_score, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, InputMode, PauseItem, SessionEnd};

/// Session phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    /// Pause menu is open with the given item selected.
    Paused(PauseItem),
    GameOver(SessionEnd),
}

impl Phase {
    /// Key-mapping context for this phase.
    pub fn input_mode(self) -> InputMode {
        match self {
            Phase::Playing => InputMode::Playing,
            Phase::Paused(_) => InputMode::Menu,
            Phase::GameOver(_) => InputMode::GameOver,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Paused(_) => "paused",
            Phase::GameOver(_) => "game_over",
        }
    }
}

/// Result of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    field: Field,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Ticks since the last gravity step, always below the drop interval.
    drop_timer: u32,
    /// Increments on every restart.
    episode_id: u32,
    /// Increments on every successful spawn within an episode.
    piece_id: u32,
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Start a new game with the given RNG seed. The first piece is spawned
    /// immediately.
    pub fn new(seed: u32) -> Self {
        Self::with_field(seed, Field::new())
    }

    /// Start a new game on a prepared field. The first piece is spawned
    /// immediately, so a field that blocks the spawn anchor starts in
    /// `GameOver(ToppedOut)`.
    pub fn with_field(seed: u32, field: Field) -> Self {
        let mut session = Self {
            field,
            active: None,
            rng: SimpleRng::new(seed),
            phase: Phase::Playing,
            score: 0,
            level: 1,
            lines: 0,
            drop_timer: 0,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
        };
        session.spawn_piece();
        session
    }

    /// Throw away the current game and start a fresh one.
    ///
    /// The RNG keeps running, so the new game gets a different piece sequence.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.field.clear();
        self.active = None;
        self.phase = Phase::Playing;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_timer = 0;
        self.piece_id = 0;
        self.last_event = None;
        info!("restart: episode {}", self.episode_id);
        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Why the session ended, if it has.
    pub fn session_end(&self) -> Option<SessionEnd> {
        match self.phase {
            Phase::GameOver(end) => Some(end),
            _ => None,
        }
    }

    /// Selected pause menu item while paused.
    pub fn pause_selection(&self) -> Option<PauseItem> {
        match self.phase {
            Phase::Paused(item) => Some(item),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_timer(&self) -> u32 {
        self.drop_timer
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Gravity threshold for the current level.
    pub fn drop_interval_ticks(&self) -> u32 {
        drop_interval_ticks(self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_color_grid(&mut out.field);
        out.active = self.active;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply one player action. Returns whether anything changed.
    ///
    /// Actions that make no sense in the current phase are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (Phase::Playing, GameAction::MoveLeft) => self.try_move(-1, 0),
            (Phase::Playing, GameAction::MoveRight) => self.try_move(1, 0),
            (Phase::Playing, GameAction::Rotate) => self.try_rotate(),
            (Phase::Playing, GameAction::SoftDrop) => self.soft_drop(),
            (Phase::Playing, GameAction::HardDrop) => {
                self.hard_drop();
                true
            }
            (Phase::Playing, GameAction::Pause) => {
                self.phase = Phase::Paused(PauseItem::Continue);
                info!("paused");
                true
            }
            (Phase::Paused(item), GameAction::MenuUp) => {
                self.phase = Phase::Paused(item.prev());
                true
            }
            (Phase::Paused(item), GameAction::MenuDown) => {
                self.phase = Phase::Paused(item.next());
                true
            }
            (Phase::Paused(item), GameAction::MenuConfirm) => {
                self.select(item);
                true
            }
            (Phase::Paused(_), GameAction::Pause) => {
                self.select(PauseItem::Continue);
                true
            }
            (Phase::Paused(_), GameAction::Restart) => {
                self.select(PauseItem::Restart);
                true
            }
            (Phase::Playing | Phase::Paused(_), GameAction::Quit) => {
                self.end(SessionEnd::Exited);
                true
            }
            _ => false,
        }
    }

    fn select(&mut self, item: PauseItem) {
        match item {
            PauseItem::Continue => {
                self.phase = Phase::Playing;
                info!("resumed");
            }
            PauseItem::Restart => self.restart(),
            PauseItem::Exit => self.end(SessionEnd::Exited),
        }
    }

    fn end(&mut self, reason: SessionEnd) {
        self.phase = Phase::GameOver(reason);
        info!(
            "game over ({}): score={} level={} lines={}",
            reason.as_str(),
            self.score,
            self.level,
            self.lines
        );
    }

    /// End the game if any locked cell sits in the top row.
    ///
    /// Runs while playing or paused, and must run at the start of a tick
    /// before that tick's input is applied. Returns true if the game ended.
    pub fn check_top_out(&mut self) -> bool {
        if self.is_game_over() || !self.field.is_top_row_occupied() {
            return false;
        }
        self.end(SessionEnd::ToppedOut);
        true
    }

    /// Advance one tick of gravity. Returns true if a gravity step ran.
    ///
    /// Does nothing unless playing. A filled top row ends the game before
    /// gravity is considered.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        if self.check_top_out() {
            return false;
        }

        self.drop_timer += 1;
        if self.drop_timer < self.drop_interval_ticks() {
            return false;
        }
        self.drop_timer = 0;

        debug_assert!(self.active.is_some(), "playing without an active piece");
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Move the active piece by `(dx, dy)` if the target is legal.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !can_place(&active.shape, active.x + dx, active.y + dy, &self.field) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Rotate clockwise in place. Rejected (shape unchanged) if the rotated
    /// shape does not fit at the current anchor.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if !can_place(&rotated, active.x, active.y, &self.field) {
            return false;
        }

        self.active = Some(ActivePiece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Move down one row, or lock the piece if it cannot move.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != Phase::Playing || self.active.is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Drop until blocked, then lock. Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != Phase::Playing {
            return 0;
        }
        let Some(active) = self.active else {
            return 0;
        };

        let distance = drop_distance(&active.shape, active.x, active.y, &self.field);
        self.active = Some(ActivePiece {
            y: active.y + distance,
            ..active
        });
        self.lock_piece();
        distance as u32
    }

    /// Bake the active piece into the field, clear full rows, score them and
    /// spawn the next piece.
    pub fn lock_piece(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        let written = lock_in(&active, &mut self.field);
        let cleared = self.field.clear_full_rows();
        let lines_cleared = cleared.len();

        let score_delta = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines += lines_cleared as u32;

        let level = level_for_score(self.score);
        if level != self.level {
            info!("level {} -> {}", self.level, level);
        }
        self.level = level;

        debug!(
            "locked {} at ({}, {}): {} cells, rows cleared {:?}, +{}",
            active.kind.as_str(),
            active.x,
            active.y,
            written,
            cleared.as_slice(),
            score_delta
        );

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            score_delta,
        });

        self.spawn_piece();
    }

    /// Spawn a random piece at the spawn anchor. Ends the game if it does not fit.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind)
    }

    fn spawn_kind(&mut self, kind: crate::types::PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind);
        if !can_place(&piece.shape, piece.x, piece.y, &self.field) {
            self.active = None;
            debug!("spawn blocked for {}", kind.as_str());
            self.end(SessionEnd::ToppedOut);
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!("spawned {} (piece {})", kind.as_str(), self.piece_id);
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
