use crate::field::ColorGrid;
use crate::pieces::ActivePiece;
use crate::session::Phase;
use crate::types::{PauseItem, SessionEnd, FIELD_HEIGHT, FIELD_WIDTH};

/// Read-only copy of everything a frame needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells as color tags, `field[y][x]`, 0 for empty.
    pub field: ColorGrid,
    /// The falling piece. Not baked into `field`.
    pub active: Option<ActivePiece>,
    pub phase: Phase,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Selected pause item if the menu is open.
    pub fn pause_menu(&self) -> Option<PauseItem> {
        match self.phase {
            Phase::Paused(item) => Some(item),
            _ => None,
        }
    }

    pub fn session_end(&self) -> Option<SessionEnd> {
        match self.phase {
            Phase::GameOver(end) => Some(end),
            _ => None,
        }
    }

    /// Color tag at (x, y) with the active piece drawn over the locked cells.
    pub fn color_at(&self, x: usize, y: usize) -> u8 {
        if let Some(active) = self.active {
            let hit = active
                .cells()
                .any(|(ax, ay)| ax as isize == x as isize && ay as isize == y as isize);
            if hit {
                return active.color_tag();
            }
        }
        self.field
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            phase: Phase::Playing,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
