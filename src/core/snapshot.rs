//! Snapshot module - a flat, serializable observation of one game state
//!
//! External view adapters render from this shape and may hand it back to
//! [`GameState::from_snapshot`] to resume play; the engine itself never
//! consumes it. Serialization is line-oriented JSON friendly: plain fields,
//! piece codes for the grid, lowercase kind and rotation names.
//!
//! [`GameState::from_snapshot`]: crate::core::game::GameState::from_snapshot

use serde::{Deserialize, Serialize};

use crate::core::game::Tetromino;
use crate::types::{PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};

/// The falling piece as observed by a view adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Tetromino {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a front end needs to paint one frame and its score panel.
/// `level` is derived from `lines_cleared` and carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Locked cells as piece codes, 0 = empty, row 0 at top
    pub board: [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Anchor row where the active piece would rest if dropped now
    pub ghost_row: Option<i8>,
    /// Upcoming piece, for next-piece previews
    pub next: PieceKind,
    pub score: u32,
    pub lines_cleared: u32,
    pub level: u32,
    pub last_clear_was_tetris: bool,
    pub game_over: bool,
    /// RNG state, so a rebuilt game draws a reproducible sequence
    pub seed: u32,
}

impl GameSnapshot {
    /// An all-empty code grid
    pub fn empty_grid() -> [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize] {
        [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize]
    }
}
