//! Terminal input.
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s and forwards
//! them from a blocking reader. The game has no key-repeat logic of its
//! own; auto-repeat comes from the terminal.

pub mod map;
pub mod reader;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};
pub use reader::{forward_blocking, translate, InputEvent};
