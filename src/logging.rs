//! Log setup for the binaries.
//!
//! The terminal belongs to the game, so logs only go to a file:
//! `TYPEFALL_LOG=path` enables them, `TYPEFALL_LOG_LEVEL` sets the filter
//! (default `info`).

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the file logger if `TYPEFALL_LOG` is set. Returns whether it was.
pub fn init_from_env() -> anyhow::Result<bool> {
    let path = match std::env::var("TYPEFALL_LOG") {
        Ok(p) if !p.trim().is_empty() => p,
        _ => return Ok(false),
    };
    let level = std::env::var("TYPEFALL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.trim())
        .with_context(|| format!("failed to open log file {path}"))?;
    let filter = EnvFilter::try_new(&level)
        .with_context(|| format!("invalid TYPEFALL_LOG_LEVEL {level:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    Ok(true)
}
