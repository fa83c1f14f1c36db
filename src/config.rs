//! Game configuration: JSON file plus environment overrides.
//!
//! `TYPEFALL_CONFIG` names an optional JSON file. Individual settings can then
//! be overridden with `TYPEFALL_MODE`, `TYPEFALL_CUSTOM`, `TYPEFALL_SHIFT`,
//! `TYPEFALL_SPEED` and `TYPEFALL_SEED`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::SessionSettings;
use crate::term::Accent;
use crate::types::{DifficultyParameters, Mode, SpeedPreset, TICK_MS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Per-field overrides on top of the speed preset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DifficultyOverrides {
    pub duration_ms: Option<u32>,
    pub start_spawn_interval_ms: Option<u32>,
    pub end_spawn_interval_ms: Option<u32>,
    pub start_fall_ms: Option<u32>,
    pub end_fall_ms: Option<u32>,
}

impl DifficultyOverrides {
    fn apply(&self, mut p: DifficultyParameters) -> DifficultyParameters {
        if let Some(v) = self.duration_ms {
            p.duration_ms = v;
        }
        if let Some(v) = self.start_spawn_interval_ms {
            p.start_spawn_interval_ms = v;
        }
        if let Some(v) = self.end_spawn_interval_ms {
            p.end_spawn_interval_ms = v;
        }
        if let Some(v) = self.start_fall_ms {
            p.start_fall_ms = v;
        }
        if let Some(v) = self.end_fall_ms {
            p.end_fall_ms = v;
        }
        p
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Speed preset name: `relaxed`, `normal` or `frantic`.
    pub speed: String,
    pub difficulty: DifficultyOverrides,
    pub mode: String,
    pub custom_chars: String,
    pub shift_mode: bool,
    /// Fixed seed; a time-derived one is used when absent.
    pub seed: Option<u32>,
    pub tick_ms: u32,
    pub show_keyboard: bool,
    pub color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: SpeedPreset::Normal.as_str().to_string(),
            difficulty: DifficultyOverrides::default(),
            mode: Mode::All.as_str().to_string(),
            custom_chars: String::new(),
            shift_mode: false,
            seed: None,
            tick_ms: TICK_MS,
            show_keyboard: true,
            color: Accent::White.as_str().to_string(),
        }
    }
}

impl GameConfig {
    /// Load from `TYPEFALL_CONFIG` (if set) and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os("TYPEFALL_CONFIG") {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path))?,
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TYPEFALL_*` overrides read through `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = lookup("TYPEFALL_MODE") {
            self.mode = v;
        }
        if let Some(v) = lookup("TYPEFALL_CUSTOM") {
            self.custom_chars = v;
        }
        if let Some(v) = lookup("TYPEFALL_SHIFT") {
            self.shift_mode = parse_bool(&v)
                .ok_or_else(|| ConfigError::invalid("TYPEFALL_SHIFT", format!("not a boolean: {v:?}")))?;
        }
        if let Some(v) = lookup("TYPEFALL_SPEED") {
            self.speed = v;
        }
        if let Some(v) = lookup("TYPEFALL_SEED") {
            let seed = v
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::invalid("TYPEFALL_SEED", e.to_string()))?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.difficulty_parameters()?;
        if p.start_spawn_interval_ms == 0 || p.end_spawn_interval_ms == 0 {
            return Err(ConfigError::invalid("difficulty", "spawn intervals must be positive"));
        }
        if p.start_fall_ms == 0 || p.end_fall_ms == 0 {
            return Err(ConfigError::invalid("difficulty", "fall durations must be positive"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::invalid("tick_ms", "must be positive"));
        }
        Ok(())
    }

    pub fn speed_preset(&self) -> Result<SpeedPreset, ConfigError> {
        SpeedPreset::from_str(&self.speed)
            .ok_or_else(|| ConfigError::invalid("speed", format!("unknown preset {:?}", self.speed)))
    }

    pub fn difficulty_parameters(&self) -> Result<DifficultyParameters, ConfigError> {
        Ok(self.difficulty.apply(self.speed_preset()?.parameters()))
    }

    /// Selected mode; unknown names fall back to `all`.
    pub fn mode(&self) -> Mode {
        Mode::from_str(&self.mode).unwrap_or_else(|| {
            warn!(mode = %self.mode, "unknown mode, using all");
            Mode::All
        })
    }

    pub fn accent(&self) -> Accent {
        Accent::from_str(&self.color).unwrap_or_default()
    }

    pub fn session_settings(&self) -> Result<SessionSettings, ConfigError> {
        Ok(SessionSettings {
            difficulty: self.difficulty_parameters()?,
            mode: self.mode(),
            custom_chars: self.custom_chars.chars().collect(),
            shift_mode: self.shift_mode,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
