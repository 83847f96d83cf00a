//! Engine module - drives the game core frame by frame
//!
//! The core crate knows nothing about time sources, keyboards, terminals or
//! files. This crate defines those collaborators as traits and runs the frame
//! loop against them:
//!
//! - [`InputSource`]: discrete events polled once per frame
//! - [`Clock`]: real milliseconds elapsed since the previous frame
//! - [`FrameSink`]: receives a [`GameSnapshot`](crate::core::GameSnapshot) every frame
//! - [`GameOverNotifier`]: told once when the game is lost
//! - [`HighScoreStore`]: a single persisted best score
//!
//! Concrete terminal implementations live in the input and term crates;
//! [`SystemClock`], [`FileHighScoreStore`] and [`MemoryHighScoreStore`] live here.

pub mod clock;
pub mod score_store;
pub mod session;

pub use retro_tetris_core as core;
pub use retro_tetris_types as types;

pub use clock::{Clock, SystemClock};
pub use score_store::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
pub use session::{
    run_session, FrameSink, GameOverNotifier, InputBatch, InputSource, SessionEnd,
    MAX_EVENTS_PER_FRAME,
};
