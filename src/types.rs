//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Playfield dimensions
pub const FIELD_WIDTH: u8 = 10;
pub const FIELD_HEIGHT: u8 = 22;

/// Points awarded per cleared-line count (index = lines cleared this turn)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Extra award when a tetris immediately follows another tetris
pub const BACK_TO_BACK_BONUS: u32 = 400;

/// Drop points per row descended
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Gravity interval is `FALL_INTERVAL_BASE_MS / (level + FALL_INTERVAL_LEVEL_OFFSET)`
pub const FALL_INTERVAL_BASE_MS: u32 = 2500;
pub const FALL_INTERVAL_LEVEL_OFFSET: u32 = 4;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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
    /// All seven kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Grid code used in snapshots (0 is an empty cell)
    pub fn code(&self) -> u8 {
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

    /// Inverse of [`PieceKind::code`]; `None` for codes outside the catalog
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Next counter-clockwise orientation; four applications return to start
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Cell on the board (None = empty, Some = locked with piece kind)
pub type Cell = Option<PieceKind>;

/// Failures for clearly-invalid inputs at the engine's trust boundaries.
///
/// Invalid moves are never errors; they leave state unchanged. These variants
/// cover the inputs the engine refuses to interpret at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A turn claimed more cleared lines than one lock event can produce.
    InvalidLineCount,
    /// Score fields are internally inconsistent.
    MalformedScore,
    /// A grid or piece code does not name one of the seven catalog pieces.
    UnknownPieceCode,
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::InvalidLineCount => "invalid_line_count",
            EngineError::MalformedScore => "malformed_score",
            EngineError::UnknownPieceCode => "unknown_piece_code",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EngineError::InvalidLineCount => "a single lock event clears at most four lines",
            EngineError::MalformedScore => "score state fields are inconsistent",
            EngineError::UnknownPieceCode => "code does not name a catalog piece",
        }
    }
}
