//! Game module - the turn-based state machine for one game
//!
//! Ties together board, pieces, RNG, and scoring. Every operation consumes
//! the state and returns the successor, so callers thread one value through
//! their event handlers; an invalid move returns the state unchanged. One
//! lock event (board mutation, line clears, score update, next spawn) happens
//! inside a single call, so no intermediate state is observable.

use crate::core::pieces::{tetromino_coordinates, PieceShape, SPAWN_POSITION};
use crate::core::rng::PieceQueue;
use crate::core::scoring::{self, ScoreState};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::Board;
use crate::types::{
    EngineError, PieceKind, Rotation, HARD_DROP_POINTS_PER_ROW, SOFT_DROP_POINTS_PER_ROW,
};

/// Active falling piece: kind, orientation, and anchor position.
/// The anchor may transiently reference invalid coordinates; placements are
/// validated against the board before any commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// A new tetromino at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Absolute board coordinates of the piece's four minos
    pub fn cells(&self) -> PieceShape {
        tetromino_coordinates(self.kind, self.rotation, self.x, self.y)
    }
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    queue: PieceQueue,
    score: ScoreState,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed: empty board, first piece
    /// at the spawn anchor, zeroed score.
    pub fn new(seed: u32) -> Self {
        let mut queue = PieceQueue::new(seed);
        let first = Tetromino::spawn(queue.draw());

        Self {
            board: Board::new(),
            active: Some(first),
            queue,
            score: ScoreState::new(),
            game_over: false,
        }
    }

    /// Create a new game with a fixed seed, for reproducible sessions
    pub fn new_game() -> Self {
        Self::new(1)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Gravity interval for the current level, for the view layer's timer
    pub fn fall_interval_ms(&self) -> u32 {
        scoring::fall_interval_ms(self.score.level())
    }

    /// Attempt to move the active piece one column left
    pub fn left(self) -> Self {
        self.translated(-1)
    }

    /// Attempt to move the active piece one column right
    pub fn right(self) -> Self {
        self.translated(1)
    }

    fn translated(mut self, dx: i8) -> Self {
        if self.game_over {
            return self;
        }
        let Some(active) = self.active else {
            return self;
        };

        let moved = Tetromino {
            x: active.x + dx,
            ..active
        };
        if self.board.is_valid_placement(&moved.cells()) {
            self.active = Some(moved);
        }
        self
    }

    /// Attempt to rotate the active piece counter-clockwise at its anchor.
    /// No wall kicks: a rotation that would collide leaves the state as is.
    pub fn rotate_ccw(mut self) -> Self {
        if self.game_over {
            return self;
        }
        let Some(active) = self.active else {
            return self;
        };

        let rotated = Tetromino {
            rotation: active.rotation.rotate_ccw(),
            ..active
        };
        if self.board.is_valid_placement(&rotated.cells()) {
            self.active = Some(rotated);
        }
        self
    }

    /// Player-initiated descent: one row down for one point, or lock when
    /// the piece cannot fall further.
    pub fn soft_drop(self) -> Self {
        self.descend(SOFT_DROP_POINTS_PER_ROW)
    }

    /// Gravity tick: the same descent as a soft drop, but unscored
    pub fn next_turn(self) -> Self {
        self.descend(0)
    }

    fn descend(mut self, points_per_row: u32) -> Self {
        if self.game_over {
            return self;
        }
        let Some(active) = self.active else {
            return self;
        };

        let dropped = Tetromino {
            y: active.y + 1,
            ..active
        };
        if self.board.is_valid_placement(&dropped.cells()) {
            self.active = Some(dropped);
            if points_per_row > 0 {
                self.score = self.score.add_points(points_per_row);
            }
        } else {
            self.lock_active();
        }
        self
    }

    /// Drop the active piece to its resting position and lock it, awarding
    /// two points per row descended.
    pub fn hard_drop(mut self) -> Self {
        if self.game_over {
            return self;
        }
        let Some(active) = self.active else {
            return self;
        };

        let distance = self.drop_distance(&active);
        if distance > 0 {
            self.active = Some(Tetromino {
                y: active.y + distance as i8,
                ..active
            });
            self.score = self
                .score
                .add_points(HARD_DROP_POINTS_PER_ROW * distance);
        }
        self.lock_active();
        self
    }

    /// How many rows the piece can fall before resting
    fn drop_distance(&self, piece: &Tetromino) -> u32 {
        let mut distance: u32 = 0;
        loop {
            let next = Tetromino {
                y: piece.y + distance as i8 + 1,
                ..*piece
            };
            if self.board.is_valid_placement(&next.cells()) {
                distance += 1;
            } else {
                break;
            }
        }
        distance
    }

    /// Lock the active piece, clear lines, score the clears, spawn the next
    /// piece. Runs as one atomic step of the turn.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let locked = self.board.lock(&active.cells(), active.kind);
        let (board, cleared) = locked.clear_lines();
        self.board = board;

        // A single piece spans at most four rows, so in play the count is
        // always in catalog; an out-of-catalog count from a hand-built board
        // clears the rows without scoring them.
        if let Ok(next) = self.score.cleared_lines(cleared.len() as u32) {
            self.score = next;
        }

        let piece = Tetromino::spawn(self.queue.draw());
        if self.board.is_valid_placement(&piece.cells()) {
            self.active = Some(piece);
        } else {
            self.game_over = true;
        }
    }

    /// Resting cells of the active piece if dropped now: a pure projection
    /// for ghost rendering, never touching the real state.
    pub fn ghost_coordinates(&self) -> Option<PieceShape> {
        let active = self.active?;
        let distance = self.drop_distance(&active);
        let rested = Tetromino {
            y: active.y + distance as i8,
            ..active
        };
        Some(rested.cells())
    }

    /// Anchor row of the ghost projection
    pub fn ghost_row(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.drop_distance(&active) as i8)
    }

    /// Replace the active piece with a chosen kind at the spawn anchor, for
    /// scripted scenarios and externally driven play.
    pub fn replace_active(mut self, kind: PieceKind) -> Self {
        if self.game_over {
            return self;
        }
        self.active = Some(Tetromino::spawn(kind));
        self
    }

    /// Mutable access to the board for scenario setup
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Flat observation of this state for external view adapters
    pub fn snapshot(&self) -> GameSnapshot {
        let mut grid = GameSnapshot::empty_grid();
        self.board.write_code_grid(&mut grid);

        GameSnapshot {
            board: grid,
            active: self.active.map(ActiveSnapshot::from),
            ghost_row: self.ghost_row(),
            next: self.queue.peek(),
            score: self.score.score(),
            lines_cleared: self.score.lines_cleared(),
            level: self.score.level(),
            last_clear_was_tetris: self.score.last_clear_was_tetris(),
            game_over: self.game_over,
            seed: self.queue.seed(),
        }
    }

    /// Rebuild a playable state from a snapshot.
    ///
    /// This is a trust boundary: unknown grid codes and inconsistent score
    /// fields are rejected rather than defaulted. The piece queue restarts
    /// from the recorded seed.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, EngineError> {
        let board = Board::from_code_grid(&snapshot.board)?;
        let score = ScoreState::from_parts(
            snapshot.score,
            snapshot.lines_cleared,
            snapshot.last_clear_was_tetris,
        )?;
        let queue = PieceQueue::new(snapshot.seed);
        let active = if snapshot.game_over {
            None
        } else {
            snapshot.active.map(Tetromino::from)
        };

        Ok(Self {
            board,
            active,
            queue,
            score,
            game_over: snapshot.game_over,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_spawns_at_anchor() {
        let game = GameState::new(12345);
        let active = game.active().unwrap();

        assert_eq!((active.x, active.y), SPAWN_POSITION);
        assert_eq!(active.rotation, Rotation::North);
        assert!(!game.game_over());
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_lock_event_is_atomic() {
        // One row short of completion: the I piece fills it in a single call.
        let mut game = GameState::new(1).replace_active(PieceKind::I);
        for x in 0..10i8 {
            if !(3..7).contains(&x) {
                game.board_mut().set(x, 21, Some(PieceKind::J));
            }
        }

        let after = game.hard_drop();

        // Board cleared, score updated, next piece spawned - all at once.
        assert!(after.board().is_empty());
        assert_eq!(after.score().lines_cleared(), 1);
        assert!(after.active().is_some());
    }

    #[test]
    fn test_game_over_when_spawn_is_blocked() {
        let mut game = GameState::new(1).replace_active(PieceKind::O);
        // Stack everything below the spawn rows, leaving column 0 open so
        // nothing clears; the O locks in rows 0-1 and blocks the next spawn.
        for y in 2..22i8 {
            for x in 1..10i8 {
                game.board_mut().set(x, y, Some(PieceKind::J));
            }
        }

        let over = game.hard_drop();
        assert!(over.game_over());
        assert!(over.active().is_none());
    }

    #[test]
    fn test_operations_after_game_over_are_no_ops() {
        let mut game = GameState::new(1).replace_active(PieceKind::O);
        for y in 2..22i8 {
            for x in 1..10i8 {
                game.board_mut().set(x, y, Some(PieceKind::J));
            }
        }
        let over = game.hard_drop();
        let board = over.board().clone();
        let score = over.score();

        let after = over.left().right().rotate_ccw().soft_drop().hard_drop().next_turn();
        assert!(after.game_over());
        assert_eq!(*after.board(), board);
        assert_eq!(after.score(), score);
    }

    #[test]
    fn test_ghost_does_not_touch_state() {
        let game = GameState::new(9).replace_active(PieceKind::T);
        let before_active = game.active();
        let before_score = game.score();

        let ghost = game.ghost_coordinates().unwrap();

        assert_eq!(game.active(), before_active);
        assert_eq!(game.score(), before_score);
        // The ghost rests on the floor of the empty board.
        assert!(ghost.iter().any(|&(_, y)| y == 21));
    }
}
