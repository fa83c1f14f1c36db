//! Falling characters and the live set that owns them.

use arrayvec::ArrayVec;

use crate::types::{EntityId, MAX_LIVE_ENTITIES};

/// A spawned character with a finite fall lifetime.
///
/// Times are on the session clock (milliseconds of unpaused play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub id: EntityId,
    pub ch: char,
    pub spawned_at_ms: u64,
    pub fall_duration_ms: u32,
    /// Horizontal placement in thousandths of the field width (cosmetic).
    pub column_permille: u16,
}

impl Entity {
    /// Session time at which the entity counts as missed.
    pub fn deadline_ms(&self) -> u64 {
        self.spawned_at_ms + self.fall_duration_ms as u64
    }

    pub fn is_due(&self, clock_ms: u64) -> bool {
        clock_ms >= self.deadline_ms()
    }

    /// Fraction of the fall completed at `clock_ms`, clamped to [0, 1].
    pub fn fall_progress(&self, clock_ms: u64) -> f32 {
        if self.fall_duration_ms == 0 {
            return 1.0;
        }
        let fallen = clock_ms.saturating_sub(self.spawned_at_ms) as f32;
        (fallen / self.fall_duration_ms as f32).clamp(0.0, 1.0)
    }
}

/// Live entities in spawn order (oldest first).
///
/// Fixed capacity; the hot path never allocates.
#[derive(Debug, Clone, Default)]
pub struct LiveEntities {
    items: ArrayVec<Entity, MAX_LIVE_ENTITIES>,
}

impl LiveEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Append a freshly spawned entity. Returns it back if the set is full.
    pub fn push(&mut self, entity: Entity) -> Result<(), Entity> {
        self.items.try_push(entity).map_err(|e| e.element())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.items.iter().find(|e| e.id == id)
    }

    /// Remove by id, keeping spawn order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Remove the oldest entity showing `ch`.
    pub fn take_oldest_matching(&mut self, ch: char) -> Option<Entity> {
        let idx = self.items.iter().position(|e| e.ch == ch)?;
        Some(self.items.remove(idx))
    }

    /// Oldest entity whose deadline has passed.
    pub fn first_due(&self, clock_ms: u64) -> Option<EntityId> {
        self.items.iter().find(|e| e.is_due(clock_ms)).map(|e| e.id)
    }

    /// Drop everything, returning how many entities were live.
    pub fn clear(&mut self) -> usize {
        let n = self.items.len();
        self.items.clear();
        n
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter()
    }
}
