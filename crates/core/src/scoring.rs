//! Scoring module - line-clear points, level and gravity speed
//!
//! All three are pure functions of their inputs. The session calls
//! [`line_clear_score`] once per lock and recomputes the level from the new
//! cumulative score.

use crate::types::{BASE_DROP_TICKS, LINE_SCORES, MIN_DROP_TICKS, POINTS_PER_LEVEL};

/// Points for clearing `lines` rows with one lock.
///
/// A single piece spans at most four rows, so anything above 4 scores nothing.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level for a cumulative score: `1 + score / 1000`.
pub fn level_for_score(score: u32) -> u32 {
    1 + score / POINTS_PER_LEVEL
}

/// Ticks between gravity steps at `level`.
///
/// Falls by one tick per level and is clamped at [`MIN_DROP_TICKS`] so that
/// level 20 and above still move the piece at most once per tick.
pub fn drop_interval_ticks(level: u32) -> u32 {
    BASE_DROP_TICKS.saturating_sub(level).max(MIN_DROP_TICKS)
}
