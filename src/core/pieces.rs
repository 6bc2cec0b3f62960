//! Pieces module - tetromino catalog and rotation geometry
//!
//! Shapes are pure data: kind + orientation yields four mino offsets from the
//! piece anchor. Rotation steps counter-clockwise and is closed over the four
//! orientations. There are no wall kicks; a rotation that would collide is
//! simply rejected by the engine.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Spawn anchor for new pieces (x, y), top center of the field
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

/// Absolute board coordinates of a piece's minos at the given anchor.
/// Pure and deterministic; the result may lie off the board and is only
/// validated when the engine commits a move.
pub fn tetromino_coordinates(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> PieceShape {
    let mut cells = shape(kind, rotation);
    for (mx, my) in &mut cells {
        *mx += x;
        *my += y;
    }
    cells
}

/// I piece shapes
fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: horizontal, centered on row 1
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical, right-aligned
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal, centered on row 2
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical, left-aligned
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O piece shapes (same for all rotations)
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

/// T piece shapes
fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// S piece shapes
fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece shapes
fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// J piece shapes
fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

/// L piece shapes
fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_distinct_minos() {
        for kind in PieceKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                let cells = shape(kind, rotation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(
                            cells[i], cells[j],
                            "{:?} {:?} repeats a mino",
                            kind, rotation
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn coordinates_translate_by_anchor() {
        let base = shape(PieceKind::T, Rotation::North);
        let moved = tetromino_coordinates(PieceKind::T, Rotation::North, 3, 5);
        for (b, m) in base.iter().zip(moved.iter()) {
            assert_eq!((b.0 + 3, b.1 + 5), *m);
        }
    }

    #[test]
    fn spawn_fits_inside_field() {
        use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

        let (sx, sy) = SPAWN_POSITION;
        for kind in PieceKind::ALL {
            for (x, y) in tetromino_coordinates(kind, Rotation::North, sx, sy) {
                assert!(x >= 0 && x < FIELD_WIDTH as i8);
                assert!(y >= 0 && y < FIELD_HEIGHT as i8);
            }
        }
    }
}
