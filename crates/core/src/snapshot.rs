use crate::piece::Piece;
use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub x: i8,
    pub y: i8,
    pub rotation: usize,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            rotation: value.rotation,
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `board` already has the active piece painted in; the locked state is not
/// affected by that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: ShapeKind,
    pub score: u32,
    pub high_score: u32,
    pub fall_interval_ms: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: ShapeKind::S,
                x: 0,
                y: 0,
                rotation: 0,
            },
            next: ShapeKind::S,
            score: 0,
            high_score: 0,
            fall_interval_ms: 0,
            game_over: false,
        }
    }
}
