//! Adapter module - drive the game from an external renderer over TCP
//!
//! The terminal front end is one renderer; a browser page or any other
//! process can be another. This crate exposes the session to such clients
//! through a **line-delimited JSON protocol**:
//!
//! 1. **Connection**: the client connects (default `127.0.0.1:7878`) and
//!    receives a `welcome` with the protocol version
//! 2. **Events**: every session event is broadcast as an `event` message with
//!    a monotonically increasing `seq`
//! 3. **Commands**: clients send keystrokes and control commands; malformed or
//!    invalid lines get an `error` reply and are otherwise ignored
//! 4. **State**: a `snapshot` command is answered with a full `state` message
//!
//! # Environment Variables
//!
//! - `TYPEFALL_ADAPTER`: set to `1` to start the adapter
//! - `TYPEFALL_ADAPTER_HOST`: bind address (default `127.0.0.1`)
//! - `TYPEFALL_ADAPTER_PORT`: port (default 7878)
//! - `TYPEFALL_ADAPTER_MAX_PENDING`: command queue depth before `backpressure`
//!
//! # Example Protocol Flow
//!
//! ```text
//! Server -> Client: {"type":"welcome","protocol_version":"1.0.0"}
//! Server -> Client: {"type":"event","seq":1,"event":{"kind":"entity_spawned","id":1,"ch":"k","fall_duration_ms":5000,"column_permille":412}}
//! Client -> Server: {"type":"keystroke","seq":1,"key":"k","shift":false}
//! Server -> Client: {"type":"event","seq":2,"event":{"kind":"entity_hit","id":1}}
//! Server -> Client: {"type":"event","seq":3,"event":{"kind":"score_changed","score":1}}
//! ```
//!
//! `key` is the character the host produced and `shift` whether shift was
//! held. A symbol key is matched against its shifted form first and then
//! against itself, so `{"key":":","shift":true}` hits a live `*` or, failing
//! that, a live `:`. Letters are strict: `{"key":"a","shift":true}` only
//! hits `A`.
//!
//! # Testing
//!
//! ```bash
//! TYPEFALL_ADAPTER=1 cargo run
//! nc 127.0.0.1 7878
//! {"type":"snapshot","seq":1}
//! ```

pub mod protocol;
pub mod runtime;
pub mod server;

pub use typefall_core as core;
pub use typefall_types as types;

pub use protocol::*;
pub use runtime::{apply_command, map_message, Adapter, ClientCommand, InboundCommand, OutboundMessage};
pub use server::*;
