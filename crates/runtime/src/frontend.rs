//! Collaborators the session drives.

use anyhow::Result;

use crate::core::GameSnapshot;

/// Render, score display and game-over notice, as one host surface.
pub trait Frontend {
    /// Redraw the whole surface from `snapshot`.
    fn redraw(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// Score text changed.
    fn show_score(&mut self, text: &str) -> Result<()>;

    /// The game ended with `score`.
    fn notify_game_over(&mut self, score: u32) -> Result<()>;
}

/// Text shown by the score display
pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn redraw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).redraw(snapshot)
    }

    fn show_score(&mut self, text: &str) -> Result<()> {
        (**self).show_score(text)
    }

    fn notify_game_over(&mut self, score: u32) -> Result<()> {
        (**self).notify_game_over(score)
    }
}
