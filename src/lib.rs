//! typefall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and hosts what the
//! binaries share: configuration loading and log setup.

pub use typefall_adapter as adapter;
pub use typefall_core as core;
pub use typefall_input as input;
pub use typefall_term as term;
pub use typefall_types as types;

pub mod config;
pub mod logging;
