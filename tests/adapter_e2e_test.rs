use std::net::SocketAddr;
use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};

use typefall::adapter::{
    apply_command, run_server, ClientCommand, InboundCommand, OutboundMessage, ServerConfig,
    ServerMessage, PROTOCOL_VERSION,
};
use typefall::core::{GameSession, SessionSettings};
use typefall::types::{GameEvent, Mode, Status};

struct Harness {
    addr: SocketAddr,
    cmd_rx: mpsc::Receiver<InboundCommand>,
    out_tx: mpsc::UnboundedSender<OutboundMessage>,
}

async fn start(max_pending: usize) -> Harness {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        max_pending_commands: max_pending,
    };
    let (cmd_tx, cmd_rx) = mpsc::channel::<InboundCommand>(max_pending);
    let (out_tx, out_rx) = mpsc::unbounded_channel::<OutboundMessage>();
    let (ready_tx, ready_rx) = oneshot::channel();

    tokio::spawn(async move {
        let _ = run_server(config, cmd_tx, out_rx, Some(ready_tx)).await;
    });

    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped");

    Harness {
        addr,
        cmd_rx,
        out_tx,
    }
}

async fn connect(addr: SocketAddr) -> (Lines<BufReader<OwnedReadHalf>>, OwnedWriteHalf) {
    let stream = TcpStream::connect(addr).await.expect("connect failed");
    let (read_half, write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    let welcome = next_json(&mut lines).await;
    assert_eq!(welcome["type"], "welcome");
    assert_eq!(welcome["protocol_version"], PROTOCOL_VERSION);
    (lines, write_half)
}

async fn send_line(w: &mut OwnedWriteHalf, line: &str) {
    w.write_all(line.as_bytes()).await.unwrap();
    w.write_all(b"\n").await.unwrap();
    w.flush().await.unwrap();
}

async fn next_json(lines: &mut Lines<BufReader<OwnedReadHalf>>) -> Value {
    let line = tokio::time::timeout(Duration::from_secs(2), lines.next_line())
        .await
        .expect("timed out waiting for a line")
        .unwrap()
        .expect("connection closed");
    serde_json::from_str(&line).unwrap()
}

async fn next_command(rx: &mut mpsc::Receiver<InboundCommand>) -> InboundCommand {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a command")
        .expect("command channel closed")
}

#[tokio::test]
async fn commands_reach_the_game_loop() {
    let mut h = start(8).await;
    let (_lines, mut w) = connect(h.addr).await;

    send_line(&mut w, r#"{"type":"keystroke","seq":3,"key":"a","shift":false}"#).await;
    send_line(&mut w, r#"{"type":"mode","mode":"custom","chars":"ab"}"#).await;
    send_line(&mut w, r#"{"type":"shift","enabled":true}"#).await;

    let cmd = next_command(&mut h.cmd_rx).await;
    assert_eq!(cmd.seq, Some(3));
    assert_eq!(cmd.command, ClientCommand::Keystroke { ch: 'a', shift: false });

    let cmd = next_command(&mut h.cmd_rx).await;
    assert_eq!(
        cmd.command,
        ClientCommand::Mode {
            mode: Mode::Custom,
            chars: Some("ab".to_string())
        }
    );
    assert_eq!(next_command(&mut h.cmd_rx).await.command, ClientCommand::Shift(true));
}

#[tokio::test]
async fn malformed_lines_get_error_replies() {
    let h = start(8).await;
    let (mut lines, mut w) = connect(h.addr).await;

    send_line(&mut w, r#"{"type":"keystroke","seq":9,"key":"#).await;
    let err = next_json(&mut lines).await;
    assert_eq!(err["type"], "error");
    assert_eq!(err["code"], "invalid_json");
    assert_eq!(err["seq"], 9);

    send_line(&mut w, r#"{"type":"mode","seq":10,"mode":"dvorak"}"#).await;
    let err = next_json(&mut lines).await;
    assert_eq!(err["code"], "invalid_command");
    assert_eq!(err["seq"], 10);

    send_line(&mut w, r#"{"type":"keystroke","seq":11,"key":"ab"}"#).await;
    let err = next_json(&mut lines).await;
    assert_eq!(err["code"], "invalid_command");
}

#[tokio::test]
async fn full_queue_reports_backpressure() {
    let h = start(1).await;
    let (mut lines, mut w) = connect(h.addr).await;

    // Nobody drains the queue: the first command fills it.
    send_line(&mut w, r#"{"type":"pause","seq":1}"#).await;
    send_line(&mut w, r#"{"type":"pause","seq":2}"#).await;

    let err = next_json(&mut lines).await;
    assert_eq!(err["type"], "error");
    assert_eq!(err["code"], "backpressure");
    assert_eq!(err["seq"], 2);
    drop(h);
}

#[tokio::test]
async fn events_are_broadcast_and_snapshots_replied() {
    let mut h = start(8).await;
    let (mut a_lines, mut a_w) = connect(h.addr).await;
    let (mut b_lines, _b_w) = connect(h.addr).await;

    let mut session = GameSession::recording(SessionSettings::default(), 1);
    session.on_pause_toggle();
    for (seq, event) in session.drain_events().enumerate() {
        let line = ServerMessage::Event {
            seq: seq as u64 + 1,
            event: event.into(),
        }
        .to_line()
        .unwrap();
        h.out_tx.send(OutboundMessage::Broadcast { line }).unwrap();
    }

    for lines in [&mut a_lines, &mut b_lines] {
        let v = next_json(lines).await;
        assert_eq!(v["type"], "event");
        assert_eq!(v["seq"], 1);
        assert_eq!(v["event"]["kind"], "paused");
    }

    send_line(&mut a_w, r#"{"type":"snapshot","seq":42}"#).await;
    let cmd = next_command(&mut h.cmd_rx).await;
    let reply = apply_command(&mut session, &cmd).expect("snapshot has a reply");
    h.out_tx
        .send(OutboundMessage::ToClient {
            client_id: cmd.client_id,
            line: reply.to_line().unwrap(),
        })
        .unwrap();

    let state = next_json(&mut a_lines).await;
    assert_eq!(state["type"], "state");
    assert_eq!(state["seq"], 42);
    assert_eq!(state["status"], "paused");
    assert_eq!(state["health"], 100);
    assert!(state["entities"].as_array().unwrap().is_empty());

    // Only the asking client gets the reply.
    let none = tokio::time::timeout(Duration::from_millis(200), b_lines.next_line()).await;
    assert!(none.is_err());
}

#[tokio::test]
async fn keystroke_over_the_wire_scores() {
    let mut h = start(8).await;
    let (_lines, mut w) = connect(h.addr).await;

    let mut session = GameSession::recording(
        SessionSettings {
            mode: Mode::Custom,
            custom_chars: vec!['z'],
            ..SessionSettings::default()
        },
        1,
    );
    let mut t = 0;
    while session.live().is_empty() {
        session.on_tick(t);
        t += 16;
    }
    session.drain_events().for_each(drop);

    send_line(&mut w, r#"{"type":"keystroke","key":"z"}"#).await;
    let cmd = next_command(&mut h.cmd_rx).await;
    assert!(apply_command(&mut session, &cmd).is_none());

    assert_eq!(session.score(), 1);
    assert_eq!(session.status(), Status::Running);
    let events: Vec<_> = session.drain_events().collect();
    assert!(matches!(events[0], GameEvent::EntityHit { .. }));
    assert_eq!(events[1], GameEvent::ScoreChanged(1));
}

#[test]
fn unbindable_address_is_an_error() {
    let config = ServerConfig {
        host: "256.0.0.1".to_string(),
        ..ServerConfig::default()
    };
    let (cmd_tx, _cmd_rx) = mpsc::channel::<InboundCommand>(1);
    let (_out_tx, out_rx) = mpsc::unbounded_channel::<OutboundMessage>();
    let result = tokio_test::block_on(run_server(config, cmd_tx, out_rx, None));
    assert!(result.is_err());
}
