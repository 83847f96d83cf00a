//! Line clearing
//!
//! Rows are scanned bottom to top. Every complete row has its locked cells
//! removed; afterwards every locked cell above the topmost cleared row moves
//! down by the total number of cleared rows.
//!
//! Cells sitting between two non-adjacent cleared rows are left in place. This
//! matches the classic game's behavior and is kept as-is.

use crate::grid::{Grid, LockedCells};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Remove complete rows from `locked` and compact the cells above them.
///
/// `grid` must be the projection of `locked` (see [`Grid::build`]).
/// Returns the number of rows cleared.
pub fn clear_completed_rows(grid: &Grid, locked: &mut LockedCells) -> u32 {
    let mut cleared: u32 = 0;
    let mut topmost: Option<i8> = None;

    for y in (0..BOARD_HEIGHT as usize).rev() {
        if !grid.is_row_full(y) {
            continue;
        }
        cleared += 1;
        topmost = Some(y as i8);
        for x in 0..BOARD_WIDTH as i8 {
            locked.remove(x, y as i8);
        }
    }

    let Some(index) = topmost else {
        return 0;
    };

    let shift = cleared as i8;
    for (x, y) in locked.keys_bottom_up() {
        if y < index {
            if let Some(color) = locked.remove(x, y) {
                locked.insert(x, y + shift, color);
            }
        }
    }

    cleared
}
