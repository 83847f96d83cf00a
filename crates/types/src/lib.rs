//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the game core, the terminal renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: (5, 0); the glyph offset places a fresh piece mostly
//!   above the visible top
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame pacing interval (~60 FPS) |
//! | `INITIAL_FALL_MS` | 270 | Gravity interval at the start of a game |
//! | `MIN_FALL_MS` | 120 | Gravity never gets faster than this |
//! | `FALL_RAMP_STEP_MS` | 5 | Gravity speed-up per difficulty step |
//! | `RAMP_PERIOD_MS` | 5000 | Real time between difficulty steps |
//! | `GAME_OVER_HOLD_MS` | 1500 | How long the loss message stays up |
//!
//! # Examples
//!
//! ```
//! use retro_tetris_types::{Command, InputEvent, Rgb, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Each kind has exactly one color
//! assert_eq!(ShapeKind::S.color(), Rgb::new(0, 255, 0));
//! assert_eq!(ShapeKind::ALL.len(), 7);
//!
//! // A key press arrives as one event per frame
//! let ev = InputEvent::Key(Command::Rotate);
//! assert_ne!(ev, InputEvent::Quit);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of a rotation glyph (5x5)
pub const GLYPH_SIZE: usize = 5;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval when a game starts (0.27s per row)
pub const INITIAL_FALL_MS: u32 = 270;

/// Fastest gravity interval reachable by the difficulty ramp (0.12s per row)
pub const MIN_FALL_MS: u32 = 120;

/// Gravity speed-up applied at every difficulty step (0.005s)
pub const FALL_RAMP_STEP_MS: u32 = 5;

/// Real time between two difficulty steps
pub const RAMP_PERIOD_MS: u32 = 5000;

/// Points awarded per cleared row
pub const POINTS_PER_ROW: u32 = 10;

/// Spawn anchor column
pub const SPAWN_X: i8 = 5;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 0;

/// How long the loss message stays on screen before the session ends
pub const GAME_OVER_HOLD_MS: u32 = 1500;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of an empty board cell (black)
pub const EMPTY_COLOR: Rgb = Rgb::new(0, 0, 0);

/// The seven piece kinds
///
/// Declaration order is the classic catalog order (S, Z, I, O, J, L, T),
/// which is also the order of [`ShapeKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::T,
    ];

    /// Display color of the kind
    ///
    /// # Examples
    ///
    /// ```
    /// use retro_tetris_types::{Rgb, ShapeKind};
    ///
    /// assert_eq!(ShapeKind::I.color(), Rgb::new(0, 255, 255));
    /// assert_eq!(ShapeKind::T.color(), Rgb::new(128, 0, 128));
    /// ```
    pub const fn color(self) -> Rgb {
        match self {
            ShapeKind::S => Rgb::new(0, 255, 0),
            ShapeKind::Z => Rgb::new(255, 0, 0),
            ShapeKind::I => Rgb::new(0, 255, 255),
            ShapeKind::O => Rgb::new(255, 255, 0),
            ShapeKind::J => Rgb::new(255, 165, 0),
            ShapeKind::L => Rgb::new(0, 0, 255),
            ShapeKind::T => Rgb::new(128, 0, 128),
        }
    }
}

/// Player commands, applied once per key press
///
/// There is no hard drop, hold or counter-clockwise rotation in the classic
/// rules; `SoftDrop` moves one row and never locks the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
}

/// A discrete event delivered by the input source during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Key(Command),
}

/// A cell on the game board
///
/// - `None`: Empty cell (drawn as [`EMPTY_COLOR`])
/// - `Some(Rgb)`: Cell filled with the color of the piece that locked there
pub type Cell = Option<Rgb>;
