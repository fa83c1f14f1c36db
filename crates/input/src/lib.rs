//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]s and tracks which on-screen keys
//! should be lit after a press (terminals rarely report key releases, so
//! highlights fade out on a timer).

pub mod highlight;
pub mod map;

pub use typefall_types as types;

pub use highlight::KeyHighlights;
pub use map::{frontend_command, handle_key_event, should_quit, FrontendCommand};
