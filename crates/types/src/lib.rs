//! Shared types and constants.
//!
//! Pure data with no dependencies, usable from the engine, the terminal
//! frontend and the runtime alike.
//!
//! # Board
//!
//! - **Width**: 10 columns by default (indexed 0-9)
//! - **Height**: 20 rows by default (indexed 0-19, row 0 at the top)
//! - A cell holds 0 when empty, otherwise a colour index in `1..=COLOR_COUNT`
//!
//! # Gravity timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 1500 | Gravity interval at game start |
//! | `MIN_TICK_MS` | 500 | Interval never drops below this |
//! | `TICK_STEP_MS` | 100 | Reduction per difficulty step |
//! | `DIFFICULTY_THRESHOLD` | 500 | Score per difficulty step |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Color, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Color::from_index(1), Some(Color::Red));
//! assert_eq!(Color::Cyan.index(), 6);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board dimension (the I piece is 4 cells long)
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board dimension
pub const MAX_BOARD_DIM: u8 = 64;

/// Gravity interval at the start of a game
pub const BASE_TICK_MS: u32 = 1500;

/// Lower bound for the gravity interval
pub const MIN_TICK_MS: u32 = 500;

/// Interval reduction applied per difficulty step
pub const TICK_STEP_MS: u32 = 100;

/// Score needed for each difficulty step
pub const DIFFICULTY_THRESHOLD: u32 = 500;

/// Points awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Number of colours in the catalog
pub const COLOR_COUNT: u8 = 6;

/// Board cell: 0 = empty, otherwise a colour index (see [`Color::index`])
pub type Cell = u8;

/// Empty board cell
pub const EMPTY: Cell = 0;

/// Block colours, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Cyan,
}

impl Color {
    /// Every colour in catalog order
    pub const ALL: [Color; COLOR_COUNT as usize] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Cyan,
    ];

    /// Board cell value for this colour (catalog position + 1)
    pub fn index(self) -> Cell {
        match self {
            Color::Red => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Purple => 5,
            Color::Cyan => 6,
        }
    }

    /// Colour stored in a board cell, `None` for empty or out-of-range values
    pub fn from_index(cell: Cell) -> Option<Self> {
        match cell {
            1..=COLOR_COUNT => Some(Self::ALL[(cell - 1) as usize]),
            _ => None,
        }
    }
}

/// Player actions, one per input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Start,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Engine lifecycle
///
/// `Idle --start--> Running --(spawn blocked)--> GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Idle,
    Running,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults() {
        assert_eq!(BASE_TICK_MS, 1500);
        assert_eq!(MIN_TICK_MS, 500);
        assert_eq!(TICK_STEP_MS, 100);
        assert_eq!(DIFFICULTY_THRESHOLD, 500);
        assert_eq!(LINE_CLEAR_POINTS, 100);
    }

    #[test]
    fn color_index_roundtrip() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i + 1);
            assert_eq!(Color::from_index(color.index()), Some(*color));
        }
        assert_eq!(Color::from_index(EMPTY), None);
        assert_eq!(Color::from_index(COLOR_COUNT + 1), None);
    }

    #[test]
    fn action_names_are_distinct() {
        let names = [
            GameAction::Start,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
        ]
        .map(|action| action.as_str());
        for (i, a) in names.iter().enumerate() {
            assert!(names[i + 1..].iter().all(|b| a != b), "{a} repeated");
        }
    }

    #[test]
    fn status_defaults_to_idle() {
        assert_eq!(Status::default(), Status::Idle);
    }
}
