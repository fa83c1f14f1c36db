//! Short-lived visual effects driven by session events.
//!
//! The session only reports ids; positions come from the snapshot drawn on the
//! previous frame, which still holds entities that were just removed.

use arrayvec::ArrayVec;

use crate::core::SessionSnapshot;
use crate::types::GameEvent;

const BURST_MS: u32 = 300;
const DAMAGE_FLASH_MS: u32 = 250;
const MAX_BURSTS: usize = 32;

/// A hit marker left where an entity was destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub ch: char,
    pub column_permille: u16,
    pub fall_progress: f32,
    pub remaining_ms: u32,
}

impl Burst {
    /// 1.0 when fresh, 0.0 when gone.
    pub fn strength(&self) -> f32 {
        self.remaining_ms as f32 / BURST_MS as f32
    }
}

#[derive(Debug, Clone, Default)]
pub struct Effects {
    bursts: ArrayVec<Burst, MAX_BURSTS>,
    damage_flash_ms: u32,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, event: &GameEvent, last: &SessionSnapshot) {
        match *event {
            GameEvent::EntityHit { id } => {
                let Some(e) = last.entities.iter().find(|e| e.id == id) else {
                    return;
                };
                if self.bursts.is_full() {
                    self.bursts.remove(0);
                }
                self.bursts.push(Burst {
                    ch: e.ch,
                    column_permille: e.column_permille,
                    fall_progress: e.fall_progress,
                    remaining_ms: BURST_MS,
                });
            }
            GameEvent::EntityExpired { .. } => self.damage_flash_ms = DAMAGE_FLASH_MS,
            GameEvent::Restarted | GameEvent::EntitiesCleared => self.bursts.clear(),
            _ => {}
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        for b in self.bursts.iter_mut() {
            b.remaining_ms = b.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.bursts.retain(|b| b.remaining_ms > 0);
        self.damage_flash_ms = self.damage_flash_ms.saturating_sub(elapsed_ms);
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn damage_flash(&self) -> bool {
        self.damage_flash_ms > 0
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
        self.damage_flash_ms = 0;
    }
}
