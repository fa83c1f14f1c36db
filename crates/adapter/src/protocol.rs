//! Protocol module - JSON message types for the renderer bridge
//!
//! Every message is one JSON object on one line, tagged by `type`. Clients may
//! put a `seq` on anything they send; server replies echo it.

use serde::{Deserialize, Serialize};

use crate::core::SessionSnapshot;
use crate::types::{GameEvent, Mode};

pub const PROTOCOL_VERSION: &str = "1.0.0";

// ============== Client -> Game Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Keystroke {
        #[serde(default)]
        seq: Option<u64>,
        key: String,
        #[serde(default)]
        shift: bool,
    },
    Pause {
        #[serde(default)]
        seq: Option<u64>,
    },
    Restart {
        #[serde(default)]
        seq: Option<u64>,
    },
    Mode {
        #[serde(default)]
        seq: Option<u64>,
        mode: String,
        #[serde(default)]
        chars: Option<String>,
    },
    Shift {
        #[serde(default)]
        seq: Option<u64>,
        enabled: bool,
    },
    Expired {
        #[serde(default)]
        seq: Option<u64>,
        id: u32,
    },
    Snapshot {
        #[serde(default)]
        seq: Option<u64>,
    },
}

impl ClientMessage {
    pub fn seq(&self) -> Option<u64> {
        match self {
            ClientMessage::Keystroke { seq, .. }
            | ClientMessage::Pause { seq }
            | ClientMessage::Restart { seq }
            | ClientMessage::Mode { seq, .. }
            | ClientMessage::Shift { seq, .. }
            | ClientMessage::Expired { seq, .. }
            | ClientMessage::Snapshot { seq } => *seq,
        }
    }
}

pub fn parse_message(json: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(json)
}

/// Pull `seq` out of a line that failed to parse, so the error can echo it.
pub fn extract_seq_best_effort(s: &str) -> Option<u64> {
    let start = s.find("\"seq\"")?;
    let after_key = &s[start + 5..];
    let colon = after_key.find(':')?;
    let rest = after_key[colon + 1..].trim_start();
    let end = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}

/// Mode names accepted on the wire. Unknown names are rejected here rather
/// than silently falling back, so a typo in a client shows up as an error.
pub fn parse_mode(name: &str) -> Option<Mode> {
    Mode::from_str(name)
}

// ============== Game -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidCommand,
    Backpressure,
}

/// Outbound event payload, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WireEvent {
    EntitySpawned {
        id: u32,
        ch: char,
        fall_duration_ms: u32,
        column_permille: u16,
    },
    EntityHit {
        id: u32,
    },
    EntityExpired {
        id: u32,
    },
    EntitiesCleared,
    HealthChanged {
        health: u8,
    },
    ScoreChanged {
        score: u32,
    },
    Paused,
    Resumed,
    GameOver,
    Restarted,
}

impl From<GameEvent> for WireEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::EntitySpawned {
                id,
                ch,
                fall_duration_ms,
                column_permille,
            } => WireEvent::EntitySpawned {
                id: id.0,
                ch,
                fall_duration_ms,
                column_permille,
            },
            GameEvent::EntityHit { id } => WireEvent::EntityHit { id: id.0 },
            GameEvent::EntityExpired { id } => WireEvent::EntityExpired { id: id.0 },
            GameEvent::EntitiesCleared => WireEvent::EntitiesCleared,
            GameEvent::HealthChanged(health) => WireEvent::HealthChanged { health },
            GameEvent::ScoreChanged(score) => WireEvent::ScoreChanged { score },
            GameEvent::Paused => WireEvent::Paused,
            GameEvent::Resumed => WireEvent::Resumed,
            GameEvent::GameOver => WireEvent::GameOver,
            GameEvent::Restarted => WireEvent::Restarted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireEntity {
    pub id: u32,
    pub ch: char,
    pub column_permille: u16,
    pub fall_progress: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateMessage {
    pub seq: Option<u64>,
    pub status: &'static str,
    pub health: u8,
    pub score: u32,
    pub clock_ms: u64,
    pub mode: &'static str,
    pub shift_mode: bool,
    pub progress: f32,
    pub spawn_interval_ms: u32,
    pub fall_duration_ms: u32,
    pub entities: Vec<WireEntity>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol_version: &'static str,
    },
    Event {
        seq: u64,
        event: WireEvent,
    },
    State(StateMessage),
    Error {
        seq: Option<u64>,
        code: ErrorCode,
        message: String,
    },
}

impl ServerMessage {
    pub fn welcome() -> Self {
        ServerMessage::Welcome {
            protocol_version: PROTOCOL_VERSION,
        }
    }

    pub fn error(seq: Option<u64>, code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMessage::Error {
            seq,
            code,
            message: message.into(),
        }
    }

    /// Serialize without the trailing newline.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn build_state(seq: Option<u64>, snap: &SessionSnapshot) -> StateMessage {
    StateMessage {
        seq,
        status: snap.status.as_str(),
        health: snap.health,
        score: snap.score,
        clock_ms: snap.clock_ms,
        mode: snap.mode.as_str(),
        shift_mode: snap.shift_mode,
        progress: snap.progress,
        spawn_interval_ms: snap.spawn_interval_ms,
        fall_duration_ms: snap.fall_duration_ms,
        entities: snap
            .entities
            .iter()
            .map(|e| WireEntity {
                id: e.id.0,
                ch: e.ch,
                column_permille: e.column_permille,
                fall_progress: e.fall_progress,
            })
            .collect(),
    }
}
