//! Difficulty curve - maps session time to spawn interval and fall duration
//!
//! Both values move linearly from their start bounds to their end bounds over
//! `duration_ms`, then stay pinned at the end bounds. Interpolation is done in
//! integer milliseconds so the endpoints are exact.

use crate::types::DifficultyParameters;

/// Difficulty at one moment of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyPoint {
    pub spawn_interval_ms: u32,
    pub fall_duration_ms: u32,
    /// Normalized session progress in [0, 1].
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyCurve {
    params: DifficultyParameters,
}

impl DifficultyCurve {
    pub fn new(params: DifficultyParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DifficultyParameters {
        &self.params
    }

    /// Evaluate the curve `elapsed_ms` into a session.
    pub fn at(&self, elapsed_ms: u64) -> DifficultyPoint {
        let duration = self.params.duration_ms as u64;
        let elapsed = elapsed_ms.min(duration);

        let progress = if duration == 0 {
            1.0
        } else {
            elapsed as f32 / duration as f32
        };

        DifficultyPoint {
            spawn_interval_ms: lerp_ms(
                self.params.start_spawn_interval_ms,
                self.params.end_spawn_interval_ms,
                elapsed,
                duration,
            ),
            fall_duration_ms: lerp_ms(
                self.params.start_fall_ms,
                self.params.end_fall_ms,
                elapsed,
                duration,
            ),
            progress,
        }
    }
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::new(DifficultyParameters::default())
    }
}

/// `start + (end - start) * num / den`, exact at both ends.
fn lerp_ms(start: u32, end: u32, num: u64, den: u64) -> u32 {
    if den == 0 || num >= den {
        return end;
    }
    // Span times elapsed needs up to 96 bits.
    let start = start as i128;
    let end = end as i128;
    let value = start + (end - start) * num as i128 / den as i128;
    value as u32
}
