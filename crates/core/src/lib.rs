//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the frame-driven state machine.
//! It has **zero dependencies** on UI, terminal or file I/O, which keeps it:
//!
//! - **Deterministic**: Same seed and same frame inputs produce the same game
//! - **Testable**: Every rule is a plain function or a method on plain data
//! - **Portable**: The engine crate drives it; any renderer can consume snapshots
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven kinds and their 5x5 rotation glyphs
//! - [`grid`]: locked-cell map and the per-frame board projection
//! - [`piece`]: active piece, occupied cells, rotation and translation
//! - [`placement`]: legality of a piece position
//! - [`line_clear`]: complete-row removal and compaction
//! - [`rng`]: uniform seeded piece selection
//! - [`config`]: immutable per-game settings
//! - [`game_state`]: gravity, difficulty ramp, commands, locking, loss
//! - [`snapshot`]: renderer-facing copy of one frame
//!
//! # Game Rules
//!
//! - **Gravity**: one row per interval, starting at 270ms
//! - **Difficulty**: every 5s of play the interval shrinks by 5ms, down to 120ms
//! - **Locking**: a piece locks only when gravity cannot move it down
//! - **Scoring**: 10 points per cleared row
//! - **Loss**: any locked cell in the top row
//!
//! # Example
//!
//! ```
//! use retro_tetris_core::{GameConfig, GameState};
//! use retro_tetris_types::Command;
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//!
//! // One 16ms frame with two key presses
//! game.step(16, &[Command::MoveLeft, Command::Rotate]);
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```

pub mod config;
pub mod game_state;
pub mod grid;
pub mod line_clear;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use retro_tetris_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{GameState, LockEvent, Phase};
pub use grid::{Grid, LockedCells};
pub use line_clear::clear_completed_rows;
pub use piece::{Piece, PieceCells};
pub use placement::is_valid;
pub use rng::{ShapePicker, SimpleRng};
pub use shapes::{glyph_for, rotation_count, rotation_states, Glyph};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
