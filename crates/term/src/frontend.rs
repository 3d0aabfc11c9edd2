//! Terminal host for a game session.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::terminal;
use tracing::debug;

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::runtime::{score_text, Frontend};

/// Draws the game with [`GameView`] and rings the bell on game over.
pub struct TerminalFrontend<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    score: String,
    viewport: Option<Viewport>,
}

impl TerminalFrontend<io::Stdout> {
    pub fn new() -> Self {
        Self::with_renderer(TerminalRenderer::new())
    }
}

impl Default for TerminalFrontend<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalFrontend<W> {
    pub fn with_renderer(renderer: TerminalRenderer<W>) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            score: score_text(0),
            viewport: None,
        }
    }

    /// Fix the viewport instead of querying the terminal size.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn score_text(&self) -> &str {
        &self.score
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    fn viewport(&self) -> Result<Viewport> {
        match self.viewport {
            Some(viewport) => Ok(viewport),
            None => {
                let (w, h) = terminal::size().context("querying terminal size")?;
                Ok(Viewport::new(w, h))
            }
        }
    }
}

impl<W: Write> Frontend for TerminalFrontend<W> {
    fn redraw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let viewport = self.viewport()?;
        self.view
            .render_into(snapshot, &self.score, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn show_score(&mut self, text: &str) -> Result<()> {
        self.score.clear();
        self.score.push_str(text);
        Ok(())
    }

    fn notify_game_over(&mut self, score: u32) -> Result<()> {
        debug!(score, "ringing bell");
        self.renderer.bell()
    }
}
