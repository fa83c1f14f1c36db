//! Outbound event delivery.
//!
//! The session never knows who renders it. Anything that can take a
//! [`GameEvent`] can be plugged in: a terminal effects layer, the TCP adapter,
//! or a plain `Vec` in tests.

use crate::types::GameEvent;

pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
