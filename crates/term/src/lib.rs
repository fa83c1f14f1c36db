//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout frameworks and renders into a simple framebuffer that is
//! diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw from snapshots and events only, never from session internals
//! - Keep every glyph one column wide so diffing stays exact

pub mod effects;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use typefall_core as core;
pub use typefall_types as types;

pub use effects::{Burst, Effects};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Accent, AdapterStatusView, GameView, KeyboardView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
