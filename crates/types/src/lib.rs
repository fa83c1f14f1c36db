//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, adapter protocol).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_DURATION_MS` | 120000 | Time until difficulty reaches its end bounds |
//! | `DEFAULT_START_SPAWN_MS` | 1200 | Spawn interval at the start of a session |
//! | `DEFAULT_END_SPAWN_MS` | 450 | Spawn interval once fully ramped |
//! | `DEFAULT_START_FALL_MS` | 5000 | Fall duration at the start of a session |
//! | `DEFAULT_END_FALL_MS` | 2500 | Fall duration once fully ramped |
//!
//! # Health
//!
//! Health starts at `MAX_HEALTH` (100). Every character that reaches the bottom
//! unmatched costs `MISS_PENALTY` (10) points, so ten misses end a session.
//!
//! # Examples
//!
//! ```
//! use typefall_types::{GameAction, Mode, Status, MAX_HEALTH};
//!
//! // Modes parse from the selector names used by front ends.
//! assert_eq!(Mode::parse("top-row"), Mode::TopRow);
//! // Unknown names fall back to the full keyboard.
//! assert_eq!(Mode::parse("dvorak"), Mode::All);
//!
//! // Modes cycle in selector order.
//! assert_eq!(Mode::All.next(), Mode::TopRow);
//!
//! let action = GameAction::from_str("restart").unwrap();
//! assert_eq!(action, GameAction::Restart);
//!
//! assert_eq!(Status::GameOver.as_str(), "game_over");
//! assert_eq!(MAX_HEALTH, 100);
//! ```

use std::fmt;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Health at the start of every session.
pub const MAX_HEALTH: u8 = 100;

/// Health lost for every character that falls out unmatched.
pub const MISS_PENALTY: u8 = 10;

/// Score awarded per destroyed character.
pub const SCORE_PER_HIT: u32 = 1;

/// Upper bound on simultaneously falling characters.
pub const MAX_LIVE_ENTITIES: usize = 64;

/// Horizontal placement range for new characters, in thousandths of the field width.
pub const COLUMN_PERMILLE_RANGE: u16 = 950;

/// Time until the difficulty curve reaches its end bounds (2 minutes).
pub const DEFAULT_DURATION_MS: u32 = 120_000;

/// Spawn interval at session start.
pub const DEFAULT_START_SPAWN_MS: u32 = 1200;

/// Spawn interval once fully ramped.
pub const DEFAULT_END_SPAWN_MS: u32 = 450;

/// Fall duration at session start.
pub const DEFAULT_START_FALL_MS: u32 = 5000;

/// Fall duration once fully ramped.
pub const DEFAULT_END_FALL_MS: u32 = 2500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_budget_allows_ten_misses() {
        assert_eq!(MAX_HEALTH / MISS_PENALTY, 10);
        assert_eq!(MAX_HEALTH % MISS_PENALTY, 0);
    }

    #[test]
    fn default_curve_gets_harder() {
        let p = DifficultyParameters::default();
        assert!(p.end_spawn_interval_ms < p.start_spawn_interval_ms);
        assert!(p.end_fall_ms < p.start_fall_ms);
        assert_eq!(p.duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn mode_parse_is_case_insensitive_and_defaults_to_all() {
        assert_eq!(Mode::parse("RIGHT-HAND"), Mode::RightHand);
        assert_eq!(Mode::parse("right_hand"), Mode::RightHand);
        assert_eq!(Mode::parse("Custom"), Mode::Custom);
        assert_eq!(Mode::parse(""), Mode::All);
        assert_eq!(Mode::parse("qwerty"), Mode::All);
    }

    #[test]
    fn mode_cycle_visits_every_mode() {
        let mut m = Mode::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(m);
            m = m.next();
        }
        assert_eq!(m, Mode::All);
        assert_eq!(
            seen,
            vec![Mode::All, Mode::TopRow, Mode::RightHand, Mode::Custom]
        );
    }

    #[test]
    fn speed_presets_round_trip_names() {
        for preset in [SpeedPreset::Relaxed, SpeedPreset::Normal, SpeedPreset::Frantic] {
            assert_eq!(SpeedPreset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(SpeedPreset::Normal.parameters(), DifficultyParameters::default());
    }

    #[test]
    fn frantic_is_faster_than_relaxed() {
        let r = SpeedPreset::Relaxed.parameters();
        let f = SpeedPreset::Frantic.parameters();
        assert!(f.start_spawn_interval_ms < r.start_spawn_interval_ms);
        assert!(f.end_fall_ms < r.end_fall_ms);
    }
}

/// Character pool selection.
///
/// - **All**: every single-character key of the keyboard layout
/// - **TopRow**: the number row
/// - **RightHand**: keys under the right hand
/// - **Custom**: a caller-supplied character sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    All,
    TopRow,
    RightHand,
    Custom,
}

impl Mode {
    /// Parse a mode from its selector name (case-insensitive).
    ///
    /// Unknown names resolve to [`Mode::All`].
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    /// Strict parse; `None` for unknown names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" => Some(Mode::All),
            "top-row" | "toprow" => Some(Mode::TopRow),
            "right-hand" | "righthand" => Some(Mode::RightHand),
            "custom" => Some(Mode::Custom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::TopRow => "top-row",
            Mode::RightHand => "right-hand",
            Mode::Custom => "custom",
        }
    }

    /// Next mode in selector order (wraps).
    pub fn next(&self) -> Self {
        match self {
            Mode::All => Mode::TopRow,
            Mode::TopRow => Mode::RightHand,
            Mode::RightHand => Mode::Custom,
            Mode::Custom => Mode::All,
        }
    }
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "running",
            Status::Paused => "paused",
            Status::GameOver => "game_over",
        }
    }
}

/// Identifier of a falling character.
///
/// Ids are handed out monotonically and never reused, so a late timer callback
/// can never address a newer entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static difficulty configuration, immutable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultyParameters {
    pub duration_ms: u32,
    pub start_spawn_interval_ms: u32,
    pub end_spawn_interval_ms: u32,
    pub start_fall_ms: u32,
    pub end_fall_ms: u32,
}

impl Default for DifficultyParameters {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            start_spawn_interval_ms: DEFAULT_START_SPAWN_MS,
            end_spawn_interval_ms: DEFAULT_END_SPAWN_MS,
            start_fall_ms: DEFAULT_START_FALL_MS,
            end_fall_ms: DEFAULT_END_FALL_MS,
        }
    }
}

/// Named difficulty presets (the speed selector of the front end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpeedPreset {
    Relaxed,
    #[default]
    Normal,
    Frantic,
}

impl SpeedPreset {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "relaxed" | "slow" => Some(SpeedPreset::Relaxed),
            "normal" => Some(SpeedPreset::Normal),
            "frantic" | "fast" => Some(SpeedPreset::Frantic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Relaxed => "relaxed",
            SpeedPreset::Normal => "normal",
            SpeedPreset::Frantic => "frantic",
        }
    }

    pub fn parameters(&self) -> DifficultyParameters {
        match self {
            SpeedPreset::Relaxed => DifficultyParameters {
                duration_ms: 180_000,
                start_spawn_interval_ms: 2000,
                end_spawn_interval_ms: 800,
                start_fall_ms: 6000,
                end_fall_ms: 3500,
            },
            SpeedPreset::Normal => DifficultyParameters::default(),
            SpeedPreset::Frantic => DifficultyParameters {
                duration_ms: 90_000,
                start_spawn_interval_ms: 700,
                end_spawn_interval_ms: 250,
                start_fall_ms: 3500,
                end_fall_ms: 1500,
            },
        }
    }
}

/// Game actions that can be applied to a session.
///
/// These are produced by the terminal input layer and by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// A printable key was pressed
    Type { ch: char, shift: bool },
    /// Toggle pause state
    Pause,
    /// Restart the session (from any state)
    Restart,
    /// Switch to the next character pool
    CycleMode,
    /// Flip shift mode
    ToggleShiftMode,
}

impl GameAction {
    /// Parse a control action from its name.
    ///
    /// `Type` carries a payload and has no string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            "cyclemode" => Some(GameAction::CycleMode),
            "toggleshiftmode" => Some(GameAction::ToggleShiftMode),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Type { .. } => "type",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
            GameAction::CycleMode => "cycleMode",
            GameAction::ToggleShiftMode => "toggleShiftMode",
        }
    }
}

/// Core-to-renderer event.
///
/// Emitted through the session's event sink in the order the state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    EntitySpawned {
        id: EntityId,
        ch: char,
        fall_duration_ms: u32,
        column_permille: u16,
    },
    EntityHit {
        id: EntityId,
    },
    EntityExpired {
        id: EntityId,
    },
    /// Every live entity was dropped (mode change, shift toggle, game over).
    EntitiesCleared,
    HealthChanged(u8),
    ScoreChanged(u32),
    Paused,
    Resumed,
    GameOver,
    Restarted,
}

impl GameEvent {
    /// Snake-case event name used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::EntitySpawned { .. } => "entity_spawned",
            GameEvent::EntityHit { .. } => "entity_hit",
            GameEvent::EntityExpired { .. } => "entity_expired",
            GameEvent::EntitiesCleared => "entities_cleared",
            GameEvent::HealthChanged(_) => "health_changed",
            GameEvent::ScoreChanged(_) => "score_changed",
            GameEvent::Paused => "paused",
            GameEvent::Resumed => "resumed",
            GameEvent::GameOver => "game_over",
            GameEvent::Restarted => "restarted",
        }
    }
}
