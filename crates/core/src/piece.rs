//! The active falling piece and the collision predicate.

use crate::board::Board;
use crate::shapes::Shape;
use crate::types::Color;

/// A shape placed on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    /// Column of the shape's top-left corner
    pub x: i8,
    /// Row of the shape's top-left corner
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, color: Color, x: i8, y: i8) -> Self {
        Self { shape, color, x, y }
    }

    /// Place `shape` horizontally centered on row 0 of a board `board_width` wide
    pub fn spawn(shape: Shape, color: Color, board_width: u8) -> Self {
        let x = spawn_column(board_width, shape.width());
        Self::new(shape, color, x, 0)
    }

    /// Absolute board positions of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// True if any filled cell is outside the board or on an occupied cell.
    ///
    /// The board edges act as walls: an index outside the grid counts as a hit.
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().any(|(x, y)| !board.is_valid(x, y))
    }
}

/// `floor(width / 2) - floor(shape_width / 2)`
pub fn spawn_column(board_width: u8, shape_width: usize) -> i8 {
    (board_width / 2) as i8 - (shape_width / 2) as i8
}
