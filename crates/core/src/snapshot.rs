use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shapes::MAX_SHAPE_DIM;
use crate::types::{Cell, Color, Status, BASE_TICK_MS, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Absolute cells of the active piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub cells: ArrayVec<(i8, i8), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            cells: piece.cells().collect(),
            color: piece.color,
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Read-only view handed to render and display collaborators
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major board cells
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub tick_interval_ms: u32,
    pub status: Status,
}

impl GameSnapshot {
    /// Locked cell at (x, y), `EMPTY` when out of bounds
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return EMPTY;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![EMPTY; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            tick_interval_ms: BASE_TICK_MS,
            status: Status::Idle,
        }
    }
}
