//! Terminal Tetris runner (default binary).
//!
//! Shows the title screen, plays a game, holds the loss screen, stores the
//! high score and returns to the title screen. A quit key on the title screen
//! or during a game exits.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use retro_tetris::core::{GameConfig, GameState};
use retro_tetris::engine::{
    run_session, FileHighScoreStore, HighScoreStore, SessionEnd, SystemClock,
};
use retro_tetris::input::{wait_for_start, MenuChoice, TerminalInput};
use retro_tetris::term::{LossHold, TerminalRenderer};

fn main() {
    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term));

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();
    if let Err(err) = result {
        eprintln!("retro-tetris: {err:#}");
        std::process::exit(1);
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut store = FileHighScoreStore::from_env();
    let fixed_seed = std::env::var_os("TETRIS_SEED").is_some();

    loop {
        term.show_menu()?;
        if wait_for_start()? == MenuChoice::Quit {
            return Ok(());
        }

        let mut config = GameConfig::from_env();
        if !fixed_seed {
            config = config.with_seed(time_seed());
        }
        let mut state = GameState::new(config).with_high_score(store.read());

        let mut input = TerminalInput::new();
        let mut clock = SystemClock::new();
        let mut hold = LossHold::default();
        match run_session(&mut state, &mut input, &mut clock, term, &mut hold, &mut store)? {
            SessionEnd::Quit => return Ok(()),
            SessionEnd::GameOver { .. } => term.invalidate(),
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
