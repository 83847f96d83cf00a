//! Retro Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `retro_tetris::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use retro_tetris_core as core;
pub use retro_tetris_engine as engine;
pub use retro_tetris_input as input;
pub use retro_tetris_term as term;
pub use retro_tetris_types as types;
