//! GameView: maps a [`GameSnapshot`] into a framebuffer.
//!
//! Pure; no I/O.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Color, Status};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: [&str; 5] = [
    "enter  start",
    "← →    move",
    "↓      drop",
    "↑ spc  rotate",
    "q      quit",
];

/// Board plus side panel, centered in the viewport.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps squares roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// `score_text` is shown verbatim in the side panel.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        score_text: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::new(Rgb::new(220, 220, 220), SCREEN_BG).glyph(' '));

        let well_w = snap.width as u16 * self.cell_w;
        let well_h = snap.height as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;
        let x0 = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let y0 = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(x0 + 1, y0 + 1, well_w, well_h, ' ', Style::new(WELL_BG, WELL_BG));
        draw_border(fb, x0, y0, frame_w, frame_h);

        let dot = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                match Color::from_index(snap.cell(x, y)) {
                    Some(color) => self.draw_block(fb, x0, y0, x as i8, y as i8, color),
                    None => self.fill_cell(fb, x0, y0, x as u16, y as u16, '·', dot),
                }
            }
        }

        if let Some(active) = &snap.active {
            for &(x, y) in &active.cells {
                self.draw_block(fb, x0, y0, x, y, active.color);
            }
        }

        draw_panel(fb, snap, score_text, x0 + frame_w + 2, y0);

        match snap.status {
            Status::Idle => overlay(fb, x0, y0, frame_w, frame_h, "PRESS ENTER"),
            Status::GameOver => overlay(fb, x0, y0, frame_w, frame_h, "GAME OVER"),
            Status::Running => {}
        }
    }

    /// Allocate a framebuffer and render into it.
    pub fn render(&self, snap: &GameSnapshot, score_text: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, score_text, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: i8, y: i8, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let style = Style::new(block_rgb(color), WELL_BG).bold();
        self.fill_cell(fb, x0, y0, x as u16, y as u16, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: u16, y: u16, ch: char, style: Style) {
        fb.fill_rect(x0 + 1 + x * self.cell_w, y0 + 1 + y, self.cell_w, 1, ch, style);
    }
}

const PANEL_W: u16 = 16;

fn draw_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, score_text: &str, x: u16, y0: u16) {
    if x >= fb.width() {
        return;
    }
    let label = Style::default().bold();
    let value = Style::default();
    let dim = value.dim();

    fb.put_str(x, y0, score_text, label);
    fb.put_str(x, y0 + 2, "SPEED", label);
    fb.put_str(x, y0 + 3, &format!("{} ms", snap.tick_interval_ms), value);
    fb.put_str(x, y0 + 5, "STATUS", label);
    fb.put_str(x, y0 + 6, status_label(snap.status), value);

    for (i, line) in HELP.iter().enumerate() {
        fb.put_str(x, y0 + 8 + i as u16, line, dim);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn overlay(fb: &mut FrameBuffer, x0: u16, y0: u16, frame_w: u16, frame_h: u16, text: &str) {
    let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str_centered(x0, frame_w, y0 + frame_h / 2, text, style);
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Idle => "ready",
        Status::Running => "playing",
        Status::GameOver => "game over",
    }
}

pub fn block_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 80, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Cyan => Rgb::new(80, 220, 220),
    }
}
