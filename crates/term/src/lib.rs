//! Terminal game renderer.
//!
//! Renders snapshots into a framebuffer that is diffed and flushed to the
//! terminal, without a widget toolkit:
//!
//! - [`fb`]: styled glyph grid
//! - [`game_view`]: snapshot to framebuffer
//! - [`renderer`]: framebuffer to terminal bytes
//! - [`frontend`]: the session's [`Frontend`](crate::runtime::Frontend)

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_runtime as runtime;
pub use tui_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use frontend::TerminalFrontend;
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
