//! Piece module - the active falling piece
//!
//! A piece is a kind, an anchor and a rotation index. Its occupied cells are a
//! pure function of those four values: glyph cell (row i, col j) lands on
//! `(x + j - 2, y + i - 4)`, which centers the glyph on the anchor column and
//! keeps a freshly spawned piece mostly above the visible top.

use arrayvec::ArrayVec;

use crate::shapes::{filled_cells, glyph_for, rotation_count};
use crate::types::{Rgb, ShapeKind, GLYPH_SIZE};

/// Column offset applied to glyph cells
const GLYPH_OFFSET_X: i8 = 2;

/// Row offset applied to glyph cells
const GLYPH_OFFSET_Y: i8 = 4;

/// Absolute board cells covered by a piece (at most a full glyph)
pub type PieceCells = ArrayVec<(i8, i8), { GLYPH_SIZE * GLYPH_SIZE }>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    /// Always stored reduced modulo the kind's rotation count
    pub rotation: usize,
}

impl Piece {
    /// Create a piece at the given anchor with rotation 0
    pub fn spawn(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    pub fn rotation_count(&self) -> usize {
        rotation_count(self.kind)
    }

    /// Absolute `(column, row)` of every filled glyph cell
    pub fn occupied_cells(&self) -> PieceCells {
        filled_cells(glyph_for(self.kind, self.rotation))
            .map(|(i, j)| {
                (
                    self.x + j as i8 - GLYPH_OFFSET_X,
                    self.y + i as i8 - GLYPH_OFFSET_Y,
                )
            })
            .collect()
    }

    /// Advance to the next rotation state, wrapping to 0
    #[must_use]
    pub fn rotate_next(self) -> Self {
        Self {
            rotation: (self.rotation + 1) % self.rotation_count(),
            ..self
        }
    }

    /// Step back one rotation state; from 0 this wraps to the last state
    #[must_use]
    pub fn rotate_previous(self) -> Self {
        let count = self.rotation_count() as isize;
        Self {
            rotation: (self.rotation as isize - 1).rem_euclid(count) as usize,
            ..self
        }
    }

    /// Shift the anchor
    #[must_use]
    pub fn translate(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let p = Piece::spawn(ShapeKind::T, 5, 0);
        assert_eq!((p.x, p.y, p.rotation), (5, 0, 0));
        assert_eq!(p.color(), ShapeKind::T.color());
    }

    #[test]
    fn test_occupied_cells_apply_offset() {
        // O: glyph rows 2-3, cols 1-2
        let p = Piece::spawn(ShapeKind::O, 5, 0);
        let mut cells = p.occupied_cells().to_vec();
        cells.sort();
        assert_eq!(cells, vec![(4, -2), (4, -1), (5, -2), (5, -1)]);
    }

    #[test]
    fn test_rotate_previous_wraps_from_zero() {
        let p = Piece::spawn(ShapeKind::J, 5, 0);
        assert_eq!(p.rotate_previous().rotation, 3);

        let o = Piece::spawn(ShapeKind::O, 5, 0);
        assert_eq!(o.rotate_previous().rotation, 0);
        assert_eq!(o.rotate_next().rotation, 0);
    }

    #[test]
    fn test_translate_keeps_rotation() {
        let p = Piece::spawn(ShapeKind::L, 5, 0).rotate_next().translate(-2, 3);
        assert_eq!((p.x, p.y, p.rotation), (3, 3, 1));
    }
}
