//! Core game logic - pure, deterministic, and testable
//!
//! Everything the falling-block game knows about its rules lives here. The
//! crate has no I/O and no clock:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule can be driven step by step
//! - **Portable**: the terminal frontend is only one possible host
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with bounds checks and row clearing
//! - [`shapes`]: the seven catalog matrices and matrix rotation
//! - [`piece`]: the active piece and the collision predicate
//! - [`rng`]: uniform shape/colour selection
//! - [`scoring`]: flat line-clear points and the gravity interval ramp
//! - [`engine`]: the complete game state and its operations
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - A piece spawns centered on row 0; if it does not fit, the game is over
//! - Moves and rotations that would collide are silently reverted
//! - A gravity step that collides locks the piece, clears full rows and
//!   spawns the next piece
//! - Each cleared row scores 100; at every exact multiple of 500 the gravity
//!   interval is recomputed as `max(500, 1500 - (score / 500) * 100)` ms
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Engine, EngineEvent};
//! use tui_blocks_types::{GameAction, Status};
//!
//! let mut engine = Engine::with_seed(12345);
//! engine.apply_action(GameAction::Start);
//! assert_eq!(engine.status(), Status::Running);
//!
//! engine.apply_action(GameAction::MoveLeft);
//! engine.apply_action(GameAction::Rotate);
//! engine.apply_action(GameAction::SoftDrop);
//!
//! let events = engine.take_events();
//! assert_eq!(events[0], EngineEvent::Started);
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_blocks_types as types;

pub use board::Board;
pub use engine::{Engine, EngineEvent, StepOutcome};
pub use piece::{spawn_column, Piece};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{difficulty_fires, line_clear_points, tick_interval_ms};
pub use shapes::{Shape, ShapeKind};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
