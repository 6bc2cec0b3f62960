//! Scoring module - line-clear awards, drop points, and the gravity interval
//!
//! Scoring is a pure value-to-value transformation: every operation consumes a
//! `ScoreState` and returns the successor, so score objects are never shared
//! mutably between turns. The per-clear award uses the level in effect before
//! the turn's lines are added to the running total.

use crate::types::{
    EngineError, BACK_TO_BACK_BONUS, FALL_INTERVAL_BASE_MS, FALL_INTERVAL_LEVEL_OFFSET,
    LINE_SCORES,
};

/// Score, lines cleared, and the back-to-back tetris flag for one game.
///
/// Level is derived, never stored: `lines_cleared / 10 + 1`. Score and lines
/// cleared only grow within a game. Construction goes through [`new`] or the
/// validating [`from_parts`], so an inconsistent state cannot be represented.
///
/// [`new`]: ScoreState::new
/// [`from_parts`]: ScoreState::from_parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    score: u32,
    lines_cleared: u32,
    last_clear_was_tetris: bool,
}

impl ScoreState {
    /// Zeroed score state for a new game
    pub fn new() -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            last_clear_was_tetris: false,
        }
    }

    /// Rebuild a score state from raw fields, as found in a snapshot.
    ///
    /// The back-to-back flag can only be armed by a four-line clear, so a
    /// state claiming it with fewer than four lines cleared is malformed.
    pub fn from_parts(
        score: u32,
        lines_cleared: u32,
        last_clear_was_tetris: bool,
    ) -> Result<Self, EngineError> {
        if last_clear_was_tetris && lines_cleared < 4 {
            return Err(EngineError::MalformedScore);
        }
        Ok(Self {
            score,
            lines_cleared,
            last_clear_was_tetris,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn last_clear_was_tetris(&self) -> bool {
        self.last_clear_was_tetris
    }

    /// Current level: starts at 1, advances every 10 lines cleared
    pub fn level(&self) -> u32 {
        self.lines_cleared / 10 + 1
    }

    /// Account for the lines cleared by one lock event.
    ///
    /// Awards by count at the current level: 1 -> 100x, 2 -> 300x, 3 -> 500x,
    /// 4 -> 800x, plus 400x more when the immediately preceding clearing turn
    /// was also a tetris. A zero-line turn changes nothing, not even the
    /// back-to-back flag. Counts above four are out of catalog.
    pub fn cleared_lines(self, lines: u32) -> Result<Self, EngineError> {
        if lines as usize >= LINE_SCORES.len() {
            return Err(EngineError::InvalidLineCount);
        }
        if lines == 0 {
            return Ok(self);
        }

        let level = self.level();
        let is_tetris = lines == 4;
        let mut increment = LINE_SCORES[lines as usize] * level;
        if is_tetris && self.last_clear_was_tetris {
            increment += BACK_TO_BACK_BONUS * level;
        }

        Ok(Self {
            score: self.score + increment,
            lines_cleared: self.lines_cleared + lines,
            last_clear_was_tetris: is_tetris,
        })
    }

    /// Add drop points. Level never multiplies these.
    pub fn add_points(self, points: u32) -> Self {
        Self {
            score: self.score + points,
            ..self
        }
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Gravity-timer interval for a level, in milliseconds.
/// The view layer reschedules its timer with this after every tick, using the
/// level from the post-tick score state.
pub fn fall_interval_ms(level: u32) -> u32 {
    FALL_INTERVAL_BASE_MS / (level + FALL_INTERVAL_LEVEL_OFFSET)
}
