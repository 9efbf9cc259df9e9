#![allow(dead_code)]
//! Pure playback timer: elapsed vs duration, clamped normalized progress.

use serde::{Deserialize, Serialize};

/// Elapsed/duration pair with clamped progress math. No hidden state; the
/// controller owns one per playback cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectTimer {
    pub elapsed: f32,
    pub duration: f32,
}

impl EffectTimer {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by a non-negative dt. Negative dt is ignored; irregular or
    /// zero dt (editor preview drivers) is fine.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Set elapsed directly (editor scrubbing), clamped into [0, duration].
    #[inline]
    pub fn seek(&mut self, elapsed: f32) {
        self.elapsed = elapsed.clamp(0.0, self.duration.max(0.0));
    }

    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Normalized progress in [0, 1]. A non-positive duration is treated as
    /// already complete, so progress reads 1.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }
}
