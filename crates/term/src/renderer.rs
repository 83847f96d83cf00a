//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! Frames are diffed against the previous one so only changed runs of cells
//! are written. The renderer is the session's frame sink; [`LossHold`] is its
//! game-over notifier.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::engine::{FrameSink, GameOverNotifier};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport};
use crate::types::GAME_OVER_HOLD_MS;

/// Fallback when the terminal size cannot be queried
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    /// Frame being composed
    frame: FrameBuffer,
    /// Frame currently on screen
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: GameView::default(),
            frame: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw the title screen.
    pub fn show_menu(&mut self) -> Result<()> {
        let viewport = current_viewport();
        self.view.render_menu_into(viewport, &mut self.frame);
        self.flush_frame()
    }

    /// Draw one game frame.
    pub fn show_game(&mut self, snap: &GameSnapshot) -> Result<()> {
        let viewport = current_viewport();
        self.view.render_into(snap, viewport, &mut self.frame);
        self.flush_frame()
    }

    /// Diff `self.frame` against what is on screen, then swap buffers so the
    /// next frame can reuse the old allocation.
    fn flush_frame(&mut self) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(prev)
                if prev.width() == self.frame.width() && prev.height() == self.frame.height() =>
            {
                encode_diff_into(&prev, &self.frame, &mut self.buf)?;
                self.last = Some(prev);
            }
            other => {
                encode_full_into(&self.frame, &mut self.buf)?;
                self.last = other;
            }
        }
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(prev) => std::mem::swap(prev, &mut self.frame),
            None => self.last = Some(self.frame.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, frame: &GameSnapshot) -> Result<()> {
        self.show_game(frame)
    }
}

/// Keeps the final "YOU LOST!" frame on screen before the session returns.
///
/// The frame itself is already drawn by [`TerminalRenderer::present`], since
/// the last snapshot carries `game_over`.
#[derive(Debug, Clone, Copy)]
pub struct LossHold {
    hold: Duration,
}

impl LossHold {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }
}

impl Default for LossHold {
    fn default() -> Self {
        Self::new(Duration::from_millis(GAME_OVER_HOLD_MS as u64))
    }
}

impl GameOverNotifier for LossHold {
    fn game_over(&mut self, _frame: &GameSnapshot) -> Result<()> {
        thread::sleep(self.hold);
        Ok(())
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = terminal::size().unwrap_or(FALLBACK_SIZE);
    Viewport::new(w, h)
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_hold_waits_at_least_the_hold() {
        let mut hold = LossHold::new(Duration::from_millis(5));
        let start = std::time::Instant::now();
        hold.game_over(&GameSnapshot::default()).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        b.put_str(1, 0, "XXX", style);
        b.put(5, 1, 'Y', style);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn full_encoding_contains_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "ab", CellStyle::default());
        fb.put(2, 1, 'c', CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('a'));
        assert!(text.contains('b'));
        assert!(text.contains('c'));
        assert!(text.contains("\r\n"));
    }
}
