//! Health tracking.

use crate::types::MAX_HEALTH;

/// Result of applying damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthChange {
    /// Health dropped but is still above zero.
    Damaged(u8),
    /// Health just reached zero.
    Depleted,
    /// Already at zero, or a zero penalty.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    value: u8,
}

impl Health {
    pub fn new() -> Self {
        Self { value: MAX_HEALTH }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }

    /// Subtract `penalty`, flooring at zero.
    pub fn take_damage(&mut self, penalty: u8) -> HealthChange {
        if self.value == 0 || penalty == 0 {
            return HealthChange::Unchanged;
        }
        self.value = self.value.saturating_sub(penalty);
        if self.value == 0 {
            HealthChange::Depleted
        } else {
            HealthChange::Damaged(self.value)
        }
    }

    pub fn reset(&mut self) {
        self.value = MAX_HEALTH;
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MISS_PENALTY;

    #[test]
    fn n_misses_cost_ten_each() {
        for n in 0..15u32 {
            let mut h = Health::new();
            for _ in 0..n {
                h.take_damage(MISS_PENALTY);
            }
            let expected = 100u32.saturating_sub(10 * n) as u8;
            assert_eq!(h.value(), expected, "after {n} misses");
        }
    }

    #[test]
    fn depletion_is_reported_once() {
        let mut h = Health::new();
        let mut depleted = 0;
        for _ in 0..20 {
            if h.take_damage(MISS_PENALTY) == HealthChange::Depleted {
                depleted += 1;
            }
        }
        assert_eq!(depleted, 1);
        assert!(h.is_depleted());
        assert_eq!(h.take_damage(MISS_PENALTY), HealthChange::Unchanged);
    }

    #[test]
    fn large_penalty_floors_at_zero() {
        let mut h = Health::new();
        assert_eq!(h.take_damage(95), HealthChange::Damaged(5));
        assert_eq!(h.take_damage(200), HealthChange::Depleted);
        assert_eq!(h.value(), 0);
    }

    #[test]
    fn reset_restores_full_health() {
        let mut h = Health::new();
        h.take_damage(100);
        h.reset();
        assert_eq!(h.value(), MAX_HEALTH);
        assert_eq!(h.take_damage(0), HealthChange::Unchanged);
    }
}
