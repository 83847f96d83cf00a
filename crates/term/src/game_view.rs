//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{glyph_for, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_COLOR, GLYPH_SIZE};

const BLACK: Rgb = EMPTY_COLOR;
const WHITE: Rgb = Rgb::new(255, 255, 255);
const GRID_LINE: Rgb = Rgb::new(128, 128, 128);
const FRAME_RED: Rgb = Rgb::new(255, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the play field lands inside a viewport
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        Layout {
            x: viewport.width.saturating_sub(w) / 2,
            // Leave two rows for the title.
            y: (viewport.height.saturating_sub(h) / 2).max(2),
            w,
            h,
        }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        let title = CellStyle::new(WHITE, BLACK).bold();
        self.put_centered(fb, layout, layout.y.saturating_sub(2), "TETRIS", title);

        self.draw_frame(fb, layout);

        let empty = CellStyle::new(GRID_LINE, BLACK);
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', CellStyle::new(*color, BLACK)),
                    None => ('·', empty),
                };
                self.fill_cell(fb, layout, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panels(fb, snap, viewport, layout);

        if snap.game_over {
            self.draw_banner(fb, layout, "YOU LOST!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Title screen shown before each game.
    pub fn render_menu_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let layout = self.layout(viewport);
        let style = CellStyle::new(WHITE, BLACK).bold();
        self.put_centered(fb, layout, layout.y.saturating_sub(2), "TETRIS", style);
        self.draw_banner(fb, layout, "Press any key to begin");
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, l: Layout) {
        let style = CellStyle::new(FRAME_RED, BLACK);
        fb.put(l.x, l.y, '┏', style);
        fb.put(l.x + l.w - 1, l.y, '┓', style);
        fb.put(l.x, l.y + l.h - 1, '┗', style);
        fb.put(l.x + l.w - 1, l.y + l.h - 1, '┛', style);
        for dx in 1..l.w - 1 {
            fb.put(l.x + dx, l.y, '━', style);
            fb.put(l.x + dx, l.y + l.h - 1, '━', style);
        }
        for dy in 1..l.h - 1 {
            fb.put(l.x, l.y + dy, '┃', style);
            fb.put(l.x + l.w - 1, l.y + dy, '┃', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        l: Layout,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = l.x + 1 + x * self.cell_w;
        let py = l.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Score and next piece to the right of the board, high score to the left.
    fn draw_side_panels(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        l: Layout,
    ) {
        let label = CellStyle::new(WHITE, BLACK);
        let mid = l.y + l.h / 2;

        let right_x = l.x + l.w + 3;
        if right_x < viewport.width {
            let top = mid.saturating_sub(GLYPH_SIZE as u16 + 2);
            fb.put_str(right_x, top, "Next Shape", label);

            let style = CellStyle::new(snap.next.color(), BLACK);
            let glyph = glyph_for(snap.next, 0);
            for (i, row) in glyph.iter().enumerate() {
                for (j, &filled) in row.iter().enumerate() {
                    if filled {
                        let x = right_x + j as u16 * self.cell_w;
                        let y = top + 1 + i as u16 * self.cell_h;
                        fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', style);
                    }
                }
            }

            let score = format!("Score: {}", snap.score);
            fb.put_str(right_x, mid + 2, &score, label);
        }

        let high = format!("High Score: {}", snap.high_score);
        let text_w = high.chars().count() as u16;
        if l.x >= text_w + 3 {
            fb.put_str(l.x - text_w - 3, mid + 2, &high, label);
        } else {
            // Narrow terminal: tuck it under the board.
            fb.put_str(l.x, l.y + l.h, &high, label);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, l: Layout, text: &str) {
        let style = CellStyle::new(WHITE, BLACK).bold();
        self.put_centered(fb, l, l.y + l.h / 2, text, style);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, l: Layout, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = (l.x + l.w / 2).saturating_sub(text_w / 2);
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn board_cells_use_locked_colors() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Some(ShapeKind::Z.color());

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 30));
        let l = view.layout(Viewport::new(80, 30));

        let cell = fb.get(l.x + 1, l.y + 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, ShapeKind::Z.color());
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let _ = view.render(&GameSnapshot::default(), Viewport::new(5, 3));
    }
}
