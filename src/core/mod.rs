//! Core module - pure game logic with no I/O
//!
//! This module contains all the game rules and state management: the board,
//! the tetromino catalog, scoring, the piece queue, and the turn state
//! machine. Nothing here depends on rendering, input devices, or timers.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, ClearedRows};
pub use game::{GameState, Tetromino};
pub use pieces::{shape, tetromino_coordinates, SPAWN_POSITION};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{fall_interval_ms, ScoreState};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
