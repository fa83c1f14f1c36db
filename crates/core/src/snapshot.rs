use arrayvec::ArrayVec;

use crate::types::{EntityId, Mode, Status, MAX_HEALTH, MAX_LIVE_ENTITIES};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub ch: char,
    pub column_permille: u16,
    /// Fraction of the fall completed, in [0, 1].
    pub fall_progress: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub status: Status,
    pub health: u8,
    pub score: u32,
    pub clock_ms: u64,
    pub mode: Mode,
    pub shift_mode: bool,
    pub progress: f32,
    pub spawn_interval_ms: u32,
    pub fall_duration_ms: u32,
    pub entities: ArrayVec<EntitySnapshot, MAX_LIVE_ENTITIES>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.status = Status::Running;
        self.health = MAX_HEALTH;
        self.score = 0;
        self.clock_ms = 0;
        self.mode = Mode::All;
        self.shift_mode = false;
        self.progress = 0.0;
        self.spawn_interval_ms = 0;
        self.fall_duration_ms = 0;
        self.entities.clear();
    }

    pub fn playable(&self) -> bool {
        self.status == Status::Running
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            status: Status::Running,
            health: MAX_HEALTH,
            score: 0,
            clock_ms: 0,
            mode: Mode::All,
            shift_mode: false,
            progress: 0.0,
            spawn_interval_ms: 0,
            fall_duration_ms: 0,
            entities: ArrayVec::new(),
        }
    }
}
