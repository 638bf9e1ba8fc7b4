//! GameView: draws a `core::Board` into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::{Board, Piece};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::PieceKind;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

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

/// Board layout: each grid cell becomes `cell_w x cell_h` terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
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

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self, board: &Board) -> (u16, u16) {
        (
            scaled(board.cols(), self.cell_w).saturating_add(2),
            scaled(board.rows(), self.cell_h).saturating_add(2),
        )
    }

    /// Draw the board into `fb`, resizing it to the viewport.
    ///
    /// `banner` is centred over the playfield when given (e.g. "GAME OVER").
    pub fn render_into(
        &self,
        board: &Board,
        banner: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(board);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = Style::new(Rgb::new(90, 90, 100), PLAYFIELD_BG);
        for row in 0..board.rows() {
            let (_, py) = self.cell_origin(origin_x, origin_y, 0, row as i32);
            if py >= fb.height() {
                break;
            }
            for col in 0..board.cols() {
                let (px, py) = self.cell_origin(origin_x, origin_y, col as i32, row as i32);
                if px >= fb.width() {
                    break;
                }
                match board.cell(row, col).and_then(PieceKind::from_cell) {
                    Some(kind) => self.fill_cell(fb, px, py, BLOCK, kind_style(kind)),
                    None => self.fill_cell(fb, px, py, '·', empty),
                }
            }
        }

        let active = board.active();
        for (x, y) in active.filled_cells() {
            if x < 0 || y < 0 || x as usize >= board.cols() || y as usize >= board.rows() {
                continue;
            }
            let (px, py) = self.cell_origin(origin_x, origin_y, x, y);
            self.fill_cell(fb, px, py, BLOCK, kind_style(active.kind()).bold());
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, board, panel_x, origin_y);

        if let Some(text) = banner {
            draw_banner(fb, origin_x, origin_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, banner: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, banner, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, origin_x: u16, origin_y: u16, x: i32, y: i32) -> (u16, u16) {
        let x = u16::try_from(x).unwrap_or(u16::MAX);
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        (
            origin_x
                .saturating_add(1)
                .saturating_add(x.saturating_mul(self.cell_w)),
            origin_y
                .saturating_add(1)
                .saturating_add(y.saturating_mul(self.cell_h)),
        )
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, ch: char, style: Style) {
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, board: &Board, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_str(x, y, "CLEARED", label);
        fb.put_u32(x, y.saturating_add(1), board.cleared_rows(), value);

        let next_y = y.saturating_add(3);
        fb.put_str(x, next_y, "NEXT", label);
        if let Some(preview) = board.preview() {
            self.draw_preview(fb, preview, x, next_y.saturating_add(1));
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16) {
        let style = kind_style(piece.kind());
        for (r, row) in piece.shape_rows().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    let px = x.saturating_add(c as u16 * self.cell_w);
                    let py = y.saturating_add(r as u16 * self.cell_h);
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
                }
            }
        }
    }
}

/// `n` grid cells of `scale` terminal cells each, saturating at `u16::MAX`.
fn scaled(n: usize, scale: u16) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX).saturating_mul(scale)
}

fn kind_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    Style::new(fg, PLAYFIELD_BG)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put(cx, y, '─', style);
        fb.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put(x, cy, '│', style);
        fb.put(right, cy, '│', style);
    }
}

fn draw_banner(fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let bx = x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let by = y.saturating_add(frame_h / 2);
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(bx, by, text, style);
}
