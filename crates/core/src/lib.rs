//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole typing game state machine. It has **no
//! dependencies** on terminals, networking, or wall-clock time:
//!
//! - **Deterministic**: same seed and same input timeline produce the same session
//! - **Headless**: events go to an injected [`EventSink`]; a `Vec` works
//! - **Fast**: the live set is fixed-capacity and the tick path never allocates
//!
//! # Module Structure
//!
//! - [`charset`]: JIS keyboard layout, shift table, character pools per mode
//! - [`difficulty`]: linear ramp of spawn interval and fall duration
//! - [`entity`]: falling characters and the live set
//! - [`health`]: health with miss penalties
//! - [`matcher`]: keystroke to entity matching
//! - [`rng`]: seeded LCG
//! - [`session`]: the session controller tying everything together
//! - [`spawner`]: accumulator-based entity spawning
//!
//! # Example
//!
//! ```
//! use typefall_core::{GameSession, SessionSettings};
//! use typefall_types::{GameEvent, Status};
//!
//! let mut session = GameSession::recording(SessionSettings::default(), 12345);
//!
//! // Drive it with the host clock.
//! let mut now = 0;
//! while now < 3_000 {
//!     session.on_tick(now);
//!     now += 16;
//! }
//!
//! let spawned: Vec<char> = session
//!     .drain_events()
//!     .filter_map(|e| match e {
//!         GameEvent::EntitySpawned { ch, .. } => Some(ch),
//!         _ => None,
//!     })
//!     .collect();
//! assert!(!spawned.is_empty());
//!
//! // Typing a falling character destroys it.
//! assert!(session.on_keystroke(spawned[0], false).is_hit());
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.status(), Status::Running);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameSession::on_tick`](session::GameSession::on_tick) with
//! its monotonic milliseconds. Only running time counts: pausing freezes the
//! session clock, the difficulty ramp and every entity's fall.

pub mod charset;
pub mod difficulty;
pub mod entity;
pub mod health;
pub mod matcher;
pub mod rng;
pub mod session;
pub mod sink;
pub mod snapshot;
pub mod spawner;

pub use typefall_types as types;

// Re-export commonly used types for convenience
pub use difficulty::{DifficultyCurve, DifficultyPoint};
pub use entity::{Entity, LiveEntities};
pub use health::{Health, HealthChange};
pub use matcher::MatchResult;
pub use rng::SimpleRng;
pub use session::{GameSession, SessionSettings};
pub use sink::{EventSink, NullSink};
pub use snapshot::{EntitySnapshot, SessionSnapshot};
pub use spawner::EntitySpawner;
