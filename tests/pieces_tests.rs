//! Piece catalog and rotation properties

use retro_tetris::core::{glyph_for, rotation_count, rotation_states, Piece};
use retro_tetris::types::ShapeKind;

#[test]
fn test_rotation_counts_match_catalog() {
    let expected = [
        (ShapeKind::S, 2),
        (ShapeKind::Z, 2),
        (ShapeKind::I, 2),
        (ShapeKind::O, 1),
        (ShapeKind::J, 4),
        (ShapeKind::L, 4),
        (ShapeKind::T, 4),
    ];
    for (kind, count) in expected {
        assert_eq!(rotation_count(kind), count, "{kind:?}");
        assert_eq!(rotation_states(kind).len(), count);
    }
}

#[test]
fn test_every_state_covers_four_cells() {
    for kind in ShapeKind::ALL {
        for rotation in 0..rotation_count(kind) {
            let piece = Piece {
                rotation,
                ..Piece::spawn(kind, 5, 10)
            };
            let filled = glyph_for(kind, rotation)
                .iter()
                .flatten()
                .filter(|&&c| c)
                .count();
            assert_eq!(filled, 4);
            assert_eq!(piece.occupied_cells().len(), filled, "{kind:?} r{rotation}");
        }
    }
}

#[test]
fn test_full_turn_returns_to_start() {
    for kind in ShapeKind::ALL {
        let start = Piece::spawn(kind, 5, 0);
        let mut piece = start;
        for _ in 0..start.rotation_count() {
            piece = piece.rotate_next();
        }
        assert_eq!(piece, start, "{kind:?}");
    }
}

#[test]
fn test_rotate_previous_undoes_rotate_next() {
    for kind in ShapeKind::ALL {
        for rotation in 0..rotation_count(kind) {
            let piece = Piece {
                rotation,
                ..Piece::spawn(kind, 5, 0)
            };
            assert_eq!(piece.rotate_next().rotate_previous(), piece);
        }
    }
}

#[test]
fn test_rotate_previous_from_zero_wraps() {
    let t = Piece::spawn(ShapeKind::T, 5, 0).rotate_previous();
    assert_eq!(t.rotation, 3);

    let o = Piece::spawn(ShapeKind::O, 5, 0).rotate_previous();
    assert_eq!(o.rotation, 0);
}

#[test]
fn test_cell_offsets_relative_to_anchor() {
    // Vertical I occupies glyph column 2, rows 0-3.
    let cells = Piece::spawn(ShapeKind::I, 0, 20).occupied_cells();
    assert_eq!(cells.as_slice(), &[(0, 16), (0, 17), (0, 18), (0, 19)]);
}

#[test]
fn test_spawned_pieces_start_above_the_board() {
    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind, 5, 0);
        assert!(piece.occupied_cells().iter().all(|&(_, y)| y < 0), "{kind:?}");
    }
}
