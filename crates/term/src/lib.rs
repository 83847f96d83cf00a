//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! crossterm, diffing against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so it can be checked without a terminal
//! - Render board cells two characters wide to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use retro_tetris_core as core;
pub use retro_tetris_engine as engine;
pub use retro_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, LossHold, TerminalRenderer};
