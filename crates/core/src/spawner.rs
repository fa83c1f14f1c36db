//! Entity spawner - produces falling characters at the curve's rate
//!
//! Spawning is deterministic: session time accumulates between calls and one
//! spawn interval is consumed per produced entity. The expected rate is one
//! entity per interval; the carried remainder is capped at one interval so a
//! stalled host never releases a burst.

use crate::difficulty::DifficultyCurve;
use crate::entity::Entity;
use crate::rng::SimpleRng;
use crate::types::{EntityId, COLUMN_PERMILLE_RANGE};

#[derive(Debug, Clone)]
pub struct EntitySpawner {
    curve: DifficultyCurve,
    rng: SimpleRng,
    accumulator_ms: u64,
    last_clock_ms: u64,
    next_id: u32,
}

impl EntitySpawner {
    pub fn new(curve: DifficultyCurve, seed: u32) -> Self {
        Self {
            curve,
            rng: SimpleRng::new(seed),
            accumulator_ms: 0,
            last_clock_ms: 0,
            next_id: 1,
        }
    }

    pub fn curve(&self) -> &DifficultyCurve {
        &self.curve
    }

    /// Restart the cadence at `clock_ms`. Ids keep counting.
    pub fn reset(&mut self, clock_ms: u64) {
        self.accumulator_ms = 0;
        self.last_clock_ms = clock_ms;
    }

    /// Advance to `clock_ms` and spawn if an interval has elapsed.
    ///
    /// An empty `pool` consumes the interval and spawns nothing.
    pub fn try_spawn(&mut self, clock_ms: u64, pool: &[char]) -> Option<Entity> {
        let delta = clock_ms.saturating_sub(self.last_clock_ms);
        self.last_clock_ms = clock_ms;
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta);

        let point = self.curve.at(clock_ms);
        let interval = point.spawn_interval_ms.max(1) as u64;
        if self.accumulator_ms < interval {
            return None;
        }
        self.accumulator_ms = (self.accumulator_ms - interval).min(interval);

        let ch = self.rng.pick(pool)?;
        let column_permille = self.rng.next_range(COLUMN_PERMILLE_RANGE as u32) as u16;

        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        Some(Entity {
            id,
            ch,
            spawned_at_ms: clock_ms,
            fall_duration_ms: point.fall_duration_ms,
            column_permille,
        })
    }
}
