//! Engine module - the complete game state and its operations
//!
//! Ties the board, the active piece, the randomizer and the scoring rules
//! together. Every mutation goes through a collision check and is reverted
//! when the check fails, so an invalid move is never an error.
//!
//! The engine does not own a clock. It records what happened as
//! [`EngineEvent`]s and the host drains them with [`Engine::take_events`]
//! to restart or stop its gravity timer and to refresh the score display.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::scoring::{difficulty_fires, line_clear_points, tick_interval_ms};
use crate::shapes::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Something the host has to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new game began; (re)install the gravity timer
    Started,
    /// The score changed (also sent on reset)
    ScoreChanged(u32),
    /// The active piece was merged into the board
    PieceLocked,
    /// A clear pass removed this many rows (never 0)
    LinesCleared(u32),
    /// The difficulty rule fired; restart the timer at this interval
    IntervalChanged(u32),
    /// A new piece could not be placed; stop the timer
    GameOver,
}

/// Result of a single gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece landed and was locked; `lines` rows were cleared
    Locked { lines: usize },
    /// Nothing to do (no game running)
    Halted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Option<Piece>,
    score: u32,
    tick_interval_ms: u32,
    status: Status,
    pieces: PieceRandomizer,
    events: Vec<EngineEvent>,
}

impl Engine {
    /// Create an idle engine with a board of the given size
    pub fn new(width: u8, height: u8, seed: u32) -> Self {
        Self {
            board: Board::new(width, height),
            active: None,
            score: 0,
            tick_interval_ms: BASE_TICK_MS,
            status: Status::Idle,
            pieces: PieceRandomizer::new(seed),
            events: Vec::new(),
        }
    }

    /// Idle engine on the default 10x20 board
    pub fn with_seed(seed: u32) -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT, seed)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    ///
    /// [`Board::set`] refuses values outside the colour range, so the
    /// cell invariant holds.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn seed(&self) -> u32 {
        self.pieces.seed()
    }

    /// Drain the events recorded since the last call
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset board, score and interval, then spawn the first piece.
    ///
    /// Accepted from any status; this is also the restart path after a
    /// game over.
    pub fn start_game(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.tick_interval_ms = BASE_TICK_MS;
        self.status = Status::Running;
        self.events.push(EngineEvent::Started);
        self.events.push(EngineEvent::ScoreChanged(0));
        self.spawn();
    }

    /// Spawn a random piece. Returns false if it collides (game over).
    pub fn spawn(&mut self) -> bool {
        let (kind, color) = self.pieces.draw();
        self.spawn_with(kind.shape(), color)
    }

    /// Spawn a specific piece, centered on row 0.
    ///
    /// If the spawn position collides the game ends. The blocked piece is
    /// kept as the active piece so the last frame still shows it.
    pub fn spawn_with(&mut self, shape: Shape, color: Color) -> bool {
        let piece = Piece::spawn(shape, color, self.board.width());
        let blocked = piece.collides(&self.board);
        self.active = Some(piece);

        if blocked {
            self.status = Status::GameOver;
            self.events.push(EngineEvent::GameOver);
            return false;
        }
        true
    }

    /// Shift the active piece by `dx` columns; reverted on collision
    pub fn move_piece(&mut self, dx: i8) -> bool {
        self.try_update(|piece| piece.x += dx)
    }

    /// Rotate the active piece; the previous shape is restored on collision.
    ///
    /// No kick or offset correction is attempted.
    pub fn rotate(&mut self) -> bool {
        self.try_update(|piece| piece.shape = piece.shape.rotated())
    }

    /// Apply `change` to a copy of the active piece and keep it only if it fits
    fn try_update(&mut self, change: impl FnOnce(&mut Piece)) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };

        let mut candidate = active.clone();
        change(&mut candidate);
        if candidate.collides(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Gravity tick (and soft drop): move down one row, or lock, clear and
    /// spawn the next piece when the row below is blocked.
    pub fn step(&mut self) -> StepOutcome {
        if !self.is_running() || self.active.is_none() {
            return StepOutcome::Halted;
        }

        if self.try_update(|piece| piece.y += 1) {
            return StepOutcome::Moved;
        }

        self.lock_and_merge();
        let lines = self.clear_lines();
        // A blocked spawn is reported through `status` and `GameOver`.
        let _ = self.spawn();
        StepOutcome::Locked { lines }
    }

    /// Write the active piece's colour into the board and drop the piece.
    ///
    /// Returns false if there was no active piece.
    pub fn lock_and_merge(&mut self) -> bool {
        let Some(piece) = self.active.take() else {
            return false;
        };
        self.board.merge_cells(piece.cells(), piece.color.index());
        self.events.push(EngineEvent::PieceLocked);
        true
    }

    /// Remove every full row, score them, and apply the difficulty rule.
    ///
    /// The rule is checked after every pass, including passes that cleared
    /// nothing, and fires whenever the score is an exact multiple of
    /// `DIFFICULTY_THRESHOLD`.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();

        if cleared > 0 {
            self.score = self.score.saturating_add(line_clear_points(cleared));
            self.events.push(EngineEvent::LinesCleared(cleared as u32));
            self.events.push(EngineEvent::ScoreChanged(self.score));
        }

        if difficulty_fires(self.score) {
            self.tick_interval_ms = tick_interval_ms(self.score);
            self.events
                .push(EngineEvent::IntervalChanged(self.tick_interval_ms));
        }

        cleared
    }

    /// Dispatch one input action. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start_game();
                true
            }
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => self.step() != StepOutcome::Halted,
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Fill `out` with the current state, reusing its allocation
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.tick_interval_ms = self.tick_interval_ms;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    fn running(seed: u32) -> Engine {
        let mut engine = Engine::with_seed(seed);
        engine.start_game();
        engine.take_events();
        engine
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = Engine::with_seed(12345);
        assert_eq!(engine.status(), Status::Idle);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.tick_interval_ms(), BASE_TICK_MS);
        assert!(engine.active().is_none());
        assert_eq!(engine.board().filled_count(), 0);
    }

    #[test]
    fn test_start_game_events() {
        let mut engine = Engine::with_seed(12345);
        engine.start_game();
        assert_eq!(engine.status(), Status::Running);
        assert!(engine.active().is_some());
        assert_eq!(
            engine.take_events(),
            vec![EngineEvent::Started, EngineEvent::ScoreChanged(0)]
        );
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn test_operations_ignored_while_idle() {
        let mut engine = Engine::with_seed(1);
        assert!(!engine.move_piece(1));
        assert!(!engine.rotate());
        assert_eq!(engine.step(), StepOutcome::Halted);
        assert!(!engine.apply_action(GameAction::SoftDrop));
    }

    #[test]
    fn test_move_reverts_at_wall() {
        let mut engine = running(1);
        engine.board_mut().clear();
        engine.active = None;
        assert!(engine.spawn_with(ShapeKind::I.shape(), Color::Cyan));
        assert_eq!(engine.active().unwrap().x, 3);

        for _ in 0..3 {
            assert!(engine.move_piece(-1));
        }
        assert!(!engine.move_piece(-1));
        assert_eq!(engine.active().unwrap().x, 0);
    }

    #[test]
    fn test_rotate_rejected_near_floor() {
        let mut engine = running(1);
        engine.active = None;
        assert!(engine.spawn_with(ShapeKind::I.shape(), Color::Cyan));
        // Park the bar on the floor: a vertical I would poke through it.
        engine.active.as_mut().unwrap().y = 19;

        let before = engine.active().cloned();
        assert!(!engine.rotate());
        assert_eq!(engine.active().cloned(), before);
    }

    #[test]
    fn test_step_moves_then_locks() {
        let mut engine = running(1);
        engine.active = None;
        assert!(engine.spawn_with(ShapeKind::O.shape(), Color::Yellow));

        for _ in 0..18 {
            assert_eq!(engine.step(), StepOutcome::Moved);
        }
        assert_eq!(engine.step(), StepOutcome::Locked { lines: 0 });
        assert_eq!(engine.board().filled_count(), 4);
        assert_eq!(engine.board().get(4, 19), Some(Color::Yellow.index()));
        assert_eq!(engine.board().get(5, 18), Some(Color::Yellow.index()));
        assert!(engine.active().is_some());
    }

    #[test]
    fn test_difficulty_rule_fires_at_zero_score_after_lock() {
        let mut engine = running(1);
        engine.lock_and_merge();
        engine.clear_lines();
        assert_eq!(
            engine.take_events(),
            vec![EngineEvent::PieceLocked, EngineEvent::IntervalChanged(1500)]
        );
    }

    #[test]
    fn test_overshooting_a_multiple_does_not_fire() {
        let mut engine = running(1);
        engine.score = 400;
        engine.active = None;
        for y in 18..20 {
            for x in 0..10 {
                engine.board_mut().set(x, y, 1);
            }
        }
        assert_eq!(engine.clear_lines(), 2);
        assert_eq!(engine.score(), 600);
        assert_eq!(engine.tick_interval_ms(), BASE_TICK_MS);
        assert!(!engine
            .take_events()
            .iter()
            .any(|e| matches!(e, EngineEvent::IntervalChanged(_))));
    }

    #[test]
    fn test_game_over_keeps_blocked_piece() {
        let mut engine = running(1);
        for x in 0..10 {
            engine.board_mut().set(x, 0, 2);
        }
        engine.active = None;
        assert!(!engine.spawn());
        assert_eq!(engine.status(), Status::GameOver);
        assert!(engine.active().is_some());
        assert_eq!(engine.take_events(), vec![EngineEvent::GameOver]);

        // Terminal until restarted.
        assert!(!engine.move_piece(1));
        assert_eq!(engine.step(), StepOutcome::Halted);

        engine.start_game();
        assert_eq!(engine.status(), Status::Running);
        assert_eq!(engine.board().filled_count(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = running(9);
        engine.board_mut().set(0, 19, Color::Green.index());
        let snap = engine.snapshot();
        assert_eq!(snap.width, 10);
        assert_eq!(snap.height, 20);
        assert_eq!(snap.cell(0, 19), Color::Green.index());
        assert_eq!(snap.status, Status::Running);
        let active = snap.active.unwrap();
        assert_eq!(active.cells.len(), 4);
        assert!(active.cells.iter().all(|&(_, y)| y <= 1));
    }
}
