//! Runtime - drives the engine in a single execution context.
//!
//! The engine is pure; this crate gives it a clock and a host:
//!
//! - [`timer`]: the gravity timer, a repeating tokio task with a cancel handle
//! - [`session`]: the event loop that serializes input and ticks
//! - [`frontend`]: the collaborator trait for rendering and notices
//! - [`config`]: settings from environment variables
//! - [`logging`]: `tracing` subscriber writing to a file
//!
//! # Concurrency
//!
//! A single-threaded tokio runtime owns one unbounded mpsc queue. The
//! gravity timer and the input reader push [`LoopEvent`]s into it; the
//! session consumes them in arrival order. Installing a timer always
//! cancels the previous one, and ticks from a cancelled timer are dropped,
//! so at most one timer drives gravity.
//!
//! # Example
//!
//! ```
//! use tui_blocks_runtime::{GameConfig, LoopEvent};
//! use tui_blocks_runtime::types::GameAction;
//!
//! let config = GameConfig::default();
//! assert_eq!((config.width, config.height), (10, 20));
//! let _start = LoopEvent::Input(GameAction::Start);
//! ```

pub mod config;
pub mod event;
pub mod frontend;
pub mod logging;
pub mod session;
pub mod timer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use config::GameConfig;
pub use event::LoopEvent;
pub use frontend::{score_text, Frontend};
pub use session::{run, Session};
pub use timer::{GravityTimer, TimerHandle, TimerId};
