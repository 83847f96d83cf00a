//! Frame loop.
//!
//! [`run_session`] plays one game to completion: each iteration reads the
//! clock, polls input, steps the game state and hands a snapshot to the sink.
//! A quit event ends the loop before the frame is stepped. On a loss the
//! notifier runs first, then the score is offered to the high-score store.

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::clock::Clock;
use crate::core::{GameSnapshot, GameState, Phase};
use crate::score_store::HighScoreStore;
use crate::types::{Command, InputEvent};

/// Upper bound on events accepted in one frame; extra events are dropped
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// Events collected for one frame
pub type InputBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Delivers the events that arrived since the previous poll.
pub trait InputSource {
    fn poll(&mut self, out: &mut InputBatch) -> Result<()>;
}

/// Receives the board, score, high score and next piece once per frame.
pub trait FrameSink {
    fn present(&mut self, frame: &GameSnapshot) -> Result<()>;
}

/// Told once when the game is lost, before the score is stored.
pub trait GameOverNotifier {
    fn game_over(&mut self, frame: &GameSnapshot) -> Result<()>;
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    GameOver { score: u32 },
}

/// Play `state` until the player quits or loses.
pub fn run_session<I, C, F, N, S>(
    state: &mut GameState,
    input: &mut I,
    clock: &mut C,
    sink: &mut F,
    notifier: &mut N,
    store: &mut S,
) -> Result<SessionEnd>
where
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
    F: FrameSink + ?Sized,
    N: GameOverNotifier + ?Sized,
    S: HighScoreStore + ?Sized,
{
    let mut events = InputBatch::new();
    let mut commands: ArrayVec<Command, MAX_EVENTS_PER_FRAME> = ArrayVec::new();
    let mut frame = GameSnapshot::default();

    loop {
        let elapsed_ms = clock.elapsed_ms();

        events.clear();
        input.poll(&mut events)?;
        if events.contains(&InputEvent::Quit) {
            return Ok(SessionEnd::Quit);
        }

        commands.clear();
        commands.extend(events.iter().filter_map(|ev| match *ev {
            InputEvent::Key(command) => Some(command),
            InputEvent::Quit => None,
        }));

        let phase = state.step(elapsed_ms, &commands);
        state.snapshot_into(&mut frame);
        sink.present(&frame)?;

        if phase == Phase::GameOver {
            notifier.game_over(&frame)?;
            let score = state.score();
            store.write(score)?;
            return Ok(SessionEnd::GameOver { score });
        }
    }
}
