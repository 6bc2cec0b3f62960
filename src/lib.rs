//! blockfall - a pure falling-block puzzle engine.
//!
//! The engine is a state-transition library: a view adapter (browser canvas,
//! terminal, AI driver) holds one [`GameState`], feeds keyboard and gravity
//! events into the move API, and repaints from the returned state or its
//! [`GameSnapshot`]. Every operation is synchronous and total - an invalid
//! move returns the state unchanged - so the engine needs no locking, no
//! timers, and no knowledge of whatever front end drives it.

pub mod core;
pub mod types;

pub use crate::core::{
    fall_interval_ms, tetromino_coordinates, Board, GameSnapshot, GameState, ScoreState, Tetromino,
};
pub use crate::types::{Cell, EngineError, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
