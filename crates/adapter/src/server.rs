//! TCP server for the renderer bridge
//!
//! Handles incoming connections and manages client lifecycle.
//! Uses tokio for async networking.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, info, warn};

use crate::protocol::{extract_seq_best_effort, parse_message, ErrorCode, ServerMessage};
use crate::runtime::{map_message, InboundCommand, OutboundMessage};

pub const DEFAULT_PORT: u16 = 7878;
const DEFAULT_MAX_PENDING: usize = 64;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_pending_commands: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_pending_commands: DEFAULT_MAX_PENDING,
        }
    }
}

impl ServerConfig {
    /// Create from `TYPEFALL_ADAPTER_*` environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("TYPEFALL_ADAPTER_HOST")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env::var("TYPEFALL_ADAPTER_PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let max_pending_commands = env::var("TYPEFALL_ADAPTER_MAX_PENDING")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_PENDING);

        Self {
            host,
            port,
            max_pending_commands,
        }
    }

    /// Whether `TYPEFALL_ADAPTER` asks for the bridge.
    pub fn is_enabled() -> bool {
        std::env::var("TYPEFALL_ADAPTER")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid adapter address {}:{}", self.host, self.port))
    }
}

struct ClientHandle {
    id: usize,
    tx: mpsc::UnboundedSender<String>,
}

/// Shared server state
pub struct ServerState {
    config: ServerConfig,
    clients: RwLock<Vec<ClientHandle>>,
    connected: AtomicUsize,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            clients: RwLock::new(Vec::new()),
            connected: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Clients currently connected.
    pub fn client_count(&self) -> usize {
        self.connected.load(Ordering::Relaxed)
    }

    async fn send_to(&self, client_id: usize, line: String) {
        let clients = self.clients.read().await;
        if let Some(c) = clients.iter().find(|c| c.id == client_id) {
            let _ = c.tx.send(line);
        }
    }

    async fn broadcast(&self, line: String) {
        let clients = self.clients.read().await;
        for c in clients.iter() {
            let _ = c.tx.send(line.clone());
        }
    }
}

pub async fn run_server(
    config: ServerConfig,
    command_tx: mpsc::Sender<InboundCommand>,
    out_rx: mpsc::UnboundedReceiver<OutboundMessage>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let state = Arc::new(ServerState::new(config));
    run_server_with_state(state, command_tx, out_rx, ready_tx).await
}

pub async fn run_server_with_state(
    state: Arc<ServerState>,
    command_tx: mpsc::Sender<InboundCommand>,
    mut out_rx: mpsc::UnboundedReceiver<OutboundMessage>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = state.config.socket_addr()?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind adapter on {addr}"))?;
    let bound = listener.local_addr()?;
    info!(%bound, "adapter listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    // Outbound dispatcher.
    {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(msg) = out_rx.recv().await {
                match msg {
                    OutboundMessage::ToClient { client_id, line } => {
                        state.send_to(client_id, line).await
                    }
                    OutboundMessage::Broadcast { line } => state.broadcast(line).await,
                }
            }
        });
    }

    let mut client_id_counter = 0usize;
    loop {
        let (socket, peer) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;
        info!(client_id, %peer, "client connected");

        let state = Arc::clone(&state);
        let command_tx = command_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, Arc::clone(&state), command_tx).await {
                warn!(client_id, error = %e, "client error");
            }
            state.clients.write().await.retain(|c| c.id != client_id);
            state.connected.fetch_sub(1, Ordering::Relaxed);
            info!(client_id, "client disconnected");
        });
    }
}

async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    state: Arc<ServerState>,
    command_tx: mpsc::Sender<InboundCommand>,
) -> anyhow::Result<()> {
    let (reader, mut writer) = tokio::io::split(socket);
    let mut reader = BufReader::new(reader);

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    {
        let mut clients = state.clients.write().await;
        clients.push(ClientHandle {
            id: client_id,
            tx: tx.clone(),
        });
    }
    state.connected.fetch_add(1, Ordering::Relaxed);

    let write_task = tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            if writer.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            if writer.write_all(b"\n").await.is_err() {
                break;
            }
            if writer.flush().await.is_err() {
                break;
            }
        }
    });

    send_message(&tx, &ServerMessage::welcome());

    let mut line = String::new();
    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let msg = match parse_message(trimmed) {
            Ok(msg) => msg,
            Err(e) => {
                debug!(client_id, error = %e, "rejected line");
                send_message(
                    &tx,
                    &ServerMessage::error(
                        extract_seq_best_effort(trimmed),
                        ErrorCode::InvalidJson,
                        e.to_string(),
                    ),
                );
                continue;
            }
        };

        let seq = msg.seq();
        let command = match map_message(msg) {
            Ok(command) => command,
            Err(reason) => {
                send_message(
                    &tx,
                    &ServerMessage::error(seq, ErrorCode::InvalidCommand, reason),
                );
                continue;
            }
        };

        match command_tx.try_send(InboundCommand {
            client_id,
            seq,
            command,
        }) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                send_message(
                    &tx,
                    &ServerMessage::error(seq, ErrorCode::Backpressure, "command queue full"),
                );
            }
            Err(mpsc::error::TrySendError::Closed(_)) => break,
        }
    }

    drop(tx);
    write_task.abort();
    Ok(())
}

fn send_message(tx: &mpsc::UnboundedSender<String>, msg: &ServerMessage) {
    match msg.to_line() {
        Ok(line) => {
            let _ = tx.send(line);
        }
        Err(e) => warn!(error = %e, "failed to encode message"),
    }
}
