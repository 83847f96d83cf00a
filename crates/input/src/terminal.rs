//! Polling terminal input.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use retro_tetris_engine::{InputBatch, InputSource};

use crate::map::{map_key_event, should_quit};
use crate::types::TICK_MS;

/// Input source that also paces the frame loop: each poll waits until one
/// frame has passed since the previous poll, then drains every pending event.
#[derive(Debug)]
pub struct TerminalInput {
    frame: Duration,
    last_poll: Instant,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::with_frame(Duration::from_millis(TICK_MS as u64))
    }

    pub fn with_frame(frame: Duration) -> Self {
        Self {
            frame,
            last_poll: Instant::now(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, out: &mut InputBatch) -> Result<()> {
        let mut timeout = self
            .frame
            .checked_sub(self.last_poll.elapsed())
            .unwrap_or(Duration::ZERO);

        while event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Repeats and releases are not separate presses.
                if key.kind == KeyEventKind::Press {
                    if let Some(ev) = map_key_event(key) {
                        if out.try_push(ev).is_err() {
                            break;
                        }
                    }
                }
            }
            timeout = self
                .frame
                .checked_sub(self.last_poll.elapsed())
                .unwrap_or(Duration::ZERO);
        }

        self.last_poll = Instant::now();
        Ok(())
    }
}

/// What the player chose on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// Block until a key is pressed: any key starts, a quit key exits.
///
/// Keys typed before the call (for example while the loss screen was held)
/// are discarded first.
pub fn wait_for_start() -> Result<MenuChoice> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(MenuChoice::Quit);
            }
            return Ok(MenuChoice::Start);
        }
    }
}
