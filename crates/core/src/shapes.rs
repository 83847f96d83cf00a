//! Shapes module - the static piece catalog
//!
//! Every kind owns an ordered list of rotation states. A state is a 5x5 glyph
//! drawn with `'0'` for a filled cell and `'.'` for an empty one; the pictures
//! are turned into boolean grids at compile time.

use crate::types::{ShapeKind, GLYPH_SIZE};

/// One rotation state: `glyph[row][col]` is true when the cell is filled
pub type Glyph = [[bool; GLYPH_SIZE]; GLYPH_SIZE];

/// Parse a glyph picture. Any character other than `'0'` or `'.'`, or a row of
/// the wrong width, fails const evaluation.
const fn glyph(rows: [&str; GLYPH_SIZE]) -> Glyph {
    let mut out = [[false; GLYPH_SIZE]; GLYPH_SIZE];
    let mut i = 0;
    while i < GLYPH_SIZE {
        let bytes = rows[i].as_bytes();
        assert!(bytes.len() == GLYPH_SIZE, "glyph row must be 5 wide");
        let mut j = 0;
        while j < GLYPH_SIZE {
            out[i][j] = match bytes[j] {
                b'0' => true,
                b'.' => false,
                _ => panic!("glyph cells must be '0' or '.'"),
            };
            j += 1;
        }
        i += 1;
    }
    out
}

const S_STATES: [Glyph; 2] = [
    glyph([".....", ".....", "..00.", ".00..", "....."]),
    glyph([".....", "..0..", "..00.", "...0.", "....."]),
];

const Z_STATES: [Glyph; 2] = [
    glyph([".....", ".....", ".00..", "..00.", "....."]),
    glyph([".....", "..0..", ".00..", ".0...", "....."]),
];

const I_STATES: [Glyph; 2] = [
    glyph(["..0..", "..0..", "..0..", "..0..", "....."]),
    glyph([".....", "0000.", ".....", ".....", "....."]),
];

const O_STATES: [Glyph; 1] = [glyph([".....", ".....", ".00..", ".00..", "....."])];

const J_STATES: [Glyph; 4] = [
    glyph([".....", ".0...", ".000.", ".....", "....."]),
    glyph([".....", "..00.", "..0..", "..0..", "....."]),
    glyph([".....", ".....", ".000.", "...0.", "....."]),
    glyph([".....", "..0..", "..0..", ".00..", "....."]),
];

const L_STATES: [Glyph; 4] = [
    glyph([".....", "...0.", ".000.", ".....", "....."]),
    glyph([".....", "..0..", "..0..", "..00.", "....."]),
    glyph([".....", ".....", ".000.", ".0...", "....."]),
    glyph([".....", ".00..", "..0..", "..0..", "....."]),
];

const T_STATES: [Glyph; 4] = [
    glyph([".....", "..0..", ".000.", ".....", "....."]),
    glyph([".....", "..0..", "..00.", "..0..", "....."]),
    glyph([".....", ".....", ".000.", "..0..", "....."]),
    glyph([".....", "..0..", ".00..", "..0..", "....."]),
];

/// Ordered rotation states of a kind
pub fn rotation_states(kind: ShapeKind) -> &'static [Glyph] {
    match kind {
        ShapeKind::S => &S_STATES,
        ShapeKind::Z => &Z_STATES,
        ShapeKind::I => &I_STATES,
        ShapeKind::O => &O_STATES,
        ShapeKind::J => &J_STATES,
        ShapeKind::L => &L_STATES,
        ShapeKind::T => &T_STATES,
    }
}

/// Number of rotation states of a kind (1, 2 or 4)
pub fn rotation_count(kind: ShapeKind) -> usize {
    rotation_states(kind).len()
}

/// Glyph for a rotation index; the index is reduced modulo the state count
pub fn glyph_for(kind: ShapeKind, rotation: usize) -> &'static Glyph {
    let states = rotation_states(kind);
    &states[rotation % states.len()]
}

/// Iterate the filled `(row, col)` cells of a glyph
pub fn filled_cells(glyph: &Glyph) -> impl Iterator<Item = (usize, usize)> + '_ {
    glyph.iter().enumerate().flat_map(|(i, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, filled)| *filled)
            .map(move |(j, _)| (i, j))
    })
}
