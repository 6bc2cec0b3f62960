//! Pieces tests - catalog shapes and counter-clockwise rotation geometry

use blockfall::core::pieces::{shape, tetromino_coordinates, SPAWN_POSITION};
use blockfall::types::{PieceKind, Rotation};

const ALL_ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

fn sorted(mut cells: [(i8, i8); 4]) -> [(i8, i8); 4] {
    cells.sort();
    cells
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        shape(PieceKind::I, Rotation::North),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        shape(PieceKind::I, Rotation::West),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north = shape(PieceKind::O, Rotation::North);
    for rotation in ALL_ROTATIONS {
        assert_eq!(shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        shape(PieceKind::T, Rotation::North),
        [(1, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        shape(PieceKind::T, Rotation::South),
        [(0, 1), (1, 1), (2, 1), (1, 2)]
    );
}

#[test]
fn test_ccw_rotation_cycle_closes_after_four_steps() {
    for kind in PieceKind::ALL {
        for start in ALL_ROTATIONS {
            let mut rotation = start;
            for _ in 0..4 {
                rotation = rotation.rotate_ccw();
            }
            assert_eq!(rotation, start);
            assert_eq!(
                sorted(shape(kind, rotation)),
                sorted(shape(kind, start)),
                "{:?} coordinate set should be restored",
                kind
            );
        }
    }
}

#[test]
fn test_ccw_steps_through_all_orientations() {
    let mut seen = vec![Rotation::North];
    let mut rotation = Rotation::North;
    for _ in 0..3 {
        rotation = rotation.rotate_ccw();
        assert!(!seen.contains(&rotation));
        seen.push(rotation);
    }
}

#[test]
fn test_coordinates_are_shape_plus_anchor() {
    for kind in PieceKind::ALL {
        for rotation in ALL_ROTATIONS {
            let rel = shape(kind, rotation);
            let abs = tetromino_coordinates(kind, rotation, 4, 7);
            for (r, a) in rel.iter().zip(abs.iter()) {
                assert_eq!((r.0 + 4, r.1 + 7), *a);
            }
        }
    }
}

#[test]
fn test_coordinates_may_leave_the_field() {
    // Transiently off-board coordinates are representable; commit-time
    // validation is the board's job, not the catalog's.
    let cells = tetromino_coordinates(PieceKind::I, Rotation::North, -2, -1);
    assert!(cells.iter().any(|&(x, _)| x < 0));
    assert!(cells.iter().all(|&(_, y)| y == 0));
}

#[test]
fn test_spawn_position() {
    assert_eq!(SPAWN_POSITION, (3, 0));
}
