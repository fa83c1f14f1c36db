//! Adapter runtime integration.
//!
//! Bridges the sync game loop with the async TCP server. The session never
//! crosses threads: commands are queued for the game loop and applied there.

use std::sync::Arc;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::core::{EventSink, GameSession};
use crate::protocol::{build_state, parse_mode, ClientMessage, ServerMessage};
use crate::server::{run_server_with_state, ServerConfig, ServerState};
use crate::types::{EntityId, GameEvent, Mode};

/// Command delivered to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundCommand {
    pub client_id: usize,
    pub seq: Option<u64>,
    pub command: ClientCommand,
}

/// Command payload, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    Keystroke { ch: char, shift: bool },
    Pause,
    Restart,
    Mode { mode: Mode, chars: Option<String> },
    Shift(bool),
    Expired(EntityId),
    Snapshot,
}

/// Outbound message to be delivered by the server.
#[derive(Debug, Clone)]
pub enum OutboundMessage {
    ToClient { client_id: usize, line: String },
    Broadcast { line: String },
}

/// Validate a parsed message into a command.
pub fn map_message(msg: ClientMessage) -> Result<ClientCommand, String> {
    match msg {
        ClientMessage::Keystroke { key, shift, .. } => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ClientCommand::Keystroke { ch, shift }),
                _ => Err(format!("key must be a single character, got {key:?}")),
            }
        }
        ClientMessage::Pause { .. } => Ok(ClientCommand::Pause),
        ClientMessage::Restart { .. } => Ok(ClientCommand::Restart),
        ClientMessage::Mode { mode, chars, .. } => match parse_mode(&mode) {
            Some(mode) => Ok(ClientCommand::Mode { mode, chars }),
            None => Err(format!("unknown mode {mode:?}")),
        },
        ClientMessage::Shift { enabled, .. } => Ok(ClientCommand::Shift(enabled)),
        ClientMessage::Expired { id, .. } => Ok(ClientCommand::Expired(EntityId(id))),
        ClientMessage::Snapshot { .. } => Ok(ClientCommand::Snapshot),
    }
}

/// Apply a command to the session. Returns a direct reply, if the command
/// asks for one.
pub fn apply_command<S: EventSink>(
    session: &mut GameSession<S>,
    cmd: &InboundCommand,
) -> Option<ServerMessage> {
    match &cmd.command {
        ClientCommand::Keystroke { ch, shift } => {
            session.on_keystroke(*ch, *shift);
        }
        ClientCommand::Pause => session.on_pause_toggle(),
        ClientCommand::Restart => session.on_restart_requested(),
        ClientCommand::Mode { mode, chars } => session.on_mode_changed(*mode, chars.as_deref()),
        ClientCommand::Shift(enabled) => session.on_shift_mode_toggled(*enabled),
        ClientCommand::Expired(id) => {
            session.on_fall_timer_expired(*id);
        }
        ClientCommand::Snapshot => {
            return Some(ServerMessage::State(build_state(cmd.seq, &session.snapshot())));
        }
    }
    None
}

/// Running adapter instance.
pub struct Adapter {
    _rt: Runtime,
    state: Arc<ServerState>,
    cmd_rx: mpsc::Receiver<InboundCommand>,
    out_tx: mpsc::UnboundedSender<OutboundMessage>,
    event_seq: u64,
}

impl Adapter {
    /// Start the adapter from environment variables.
    ///
    /// Returns `None` unless `TYPEFALL_ADAPTER` is set.
    pub fn start_from_env() -> anyhow::Result<Option<Self>> {
        if !ServerConfig::is_enabled() {
            return Ok(None);
        }
        Self::start(ServerConfig::from_env()).map(Some)
    }

    pub fn start(config: ServerConfig) -> anyhow::Result<Self> {
        let max_pending = config.max_pending_commands.max(1);
        let (cmd_tx, cmd_rx) = mpsc::channel::<InboundCommand>(max_pending);
        let (out_tx, out_rx) = mpsc::unbounded_channel::<OutboundMessage>();

        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let state = Arc::new(ServerState::new(config));
        let server_state = Arc::clone(&state);
        rt.spawn(async move {
            if let Err(e) = run_server_with_state(server_state, cmd_tx, out_rx, None).await {
                warn!(error = %e, "adapter server stopped");
            }
        });
        info!("adapter started");

        Ok(Self {
            _rt: rt,
            state,
            cmd_rx,
            out_tx,
            event_seq: 0,
        })
    }

    pub fn try_recv(&mut self) -> Option<InboundCommand> {
        self.cmd_rx.try_recv().ok()
    }

    pub fn send(&self, msg: OutboundMessage) {
        let _ = self.out_tx.send(msg);
    }

    pub fn client_count(&self) -> usize {
        self.state.client_count()
    }

    /// Broadcast a session event to every client.
    pub fn broadcast_event(&mut self, event: GameEvent) {
        self.event_seq += 1;
        let msg = ServerMessage::Event {
            seq: self.event_seq,
            event: event.into(),
        };
        match msg.to_line() {
            Ok(line) => self.send(OutboundMessage::Broadcast { line }),
            Err(e) => warn!(error = %e, "failed to encode event"),
        }
    }

    /// Reply to the client a command came from.
    pub fn reply(&self, client_id: usize, msg: &ServerMessage) {
        match msg.to_line() {
            Ok(line) => self.send(OutboundMessage::ToClient { client_id, line }),
            Err(e) => warn!(error = %e, "failed to encode reply"),
        }
    }
}
