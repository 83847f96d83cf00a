//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s and provides a
//! polling [`TerminalInput`] that implements the engine's
//! [`InputSource`](retro_tetris_engine::InputSource). Every key press is one
//! command; terminal auto-repeat and key releases are ignored.

pub mod map;
pub mod terminal;

pub use retro_tetris_types as types;

pub use map::{handle_key_event, map_key_event, should_quit};
pub use terminal::{wait_for_start, MenuChoice, TerminalInput};
