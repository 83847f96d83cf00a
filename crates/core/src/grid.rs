//! Grid module - the locked-cell map and the per-frame board projection
//!
//! The authoritative board state is [`LockedCells`], a map from `(column, row)`
//! to the color of the piece that locked there. [`Grid`] is a 10x20 matrix
//! rebuilt from that map every frame, so the displayed board can never drift
//! from the locked state.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Locked keys may sit above the top (y < 0) right after a lock; the grid ignores them.

use std::collections::HashMap;

use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Permanently occupied cells, keyed by `(column, row)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedCells {
    cells: HashMap<(i8, i8), Rgb>,
}

impl LockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock a cell, replacing any color already stored at that key
    pub fn insert(&mut self, x: i8, y: i8, color: Rgb) -> Option<Rgb> {
        self.cells.insert((x, y), color)
    }

    /// Unlock a cell; `None` when nothing was locked there
    pub fn remove(&mut self, x: i8, y: i8) -> Option<Rgb> {
        self.cells.remove(&(x, y))
    }

    pub fn get(&self, x: i8, y: i8) -> Option<Rgb> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.cells.contains_key(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate `((x, y), color)` in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = ((i8, i8), Rgb)> + '_ {
        self.cells.iter().map(|(&k, &v)| (k, v))
    }

    /// True if any locked cell has a row strictly less than `row`
    pub fn reaches_row(&self, row: i8) -> bool {
        self.cells.keys().any(|&(_, y)| y < row)
    }

    /// Keys sorted by descending row, for shifting without collisions
    pub(crate) fn keys_bottom_up(&self) -> Vec<(i8, i8)> {
        let mut keys: Vec<_> = self.cells.keys().copied().collect();
        keys.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        keys
    }
}

impl FromIterator<((i8, i8), Rgb)> for LockedCells {
    fn from_iter<T: IntoIterator<Item = ((i8, i8), Rgb)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The board projection - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Project the locked-cell map onto a fresh grid.
    ///
    /// Keys outside the visible board are skipped.
    pub fn build(locked: &LockedCells) -> Self {
        let mut grid = Self::new();
        for ((x, y), color) in locked.iter() {
            grid.paint(x, y, color);
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Check if position is outside the visible board
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// True when (x, y) is on the board and holds no color
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Color a cell for display; returns false if out of bounds
    pub fn paint(&mut self, x: i8, y: i8, color: Rgb) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                true
            }
            None => false,
        }
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Copy into a fixed 2D array (renderer snapshot format)
    pub fn write_rows(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
