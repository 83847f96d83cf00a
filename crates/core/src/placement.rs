//! Placement validation
//!
//! A placement is legal when every occupied cell is either above the visible
//! top (row < 0, any column) or on the board and empty. Pieces may hang off the
//! top while spawning or rotating, but never off the sides or the bottom.

use crate::grid::Grid;
use crate::piece::Piece;

/// Check a single cell against the placement rule
#[inline]
pub fn is_cell_allowed(grid: &Grid, x: i8, y: i8) -> bool {
    y < 0 || grid.is_empty_at(x, y)
}

/// Check if all of the piece's cells are at allowed positions
pub fn is_valid(piece: &Piece, grid: &Grid) -> bool {
    piece
        .occupied_cells()
        .iter()
        .all(|&(x, y)| is_cell_allowed(grid, x, y))
}
