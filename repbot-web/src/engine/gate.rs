//! Hold + cooldown guard shared by every exercise
//!
//! The hold guard stops a single noisy frame from counting; the cooldown
//! stops oscillation around a threshold from counting twice. Both compare
//! wall-clock timestamps, so frame rate does not matter.

use super::state::Phase;

/// Default minimum time since the start pose before a completion counts
pub const DEFAULT_HOLD_THRESHOLD_MS: f64 = 500.0;

/// Default minimum time between two counted reps
pub const DEFAULT_REP_COOLDOWN_MS: f64 = 1000.0;

/// Timing thresholds for rep acceptance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepGate {
    pub hold_threshold_ms: f64,
    pub rep_cooldown_ms: f64,
}

impl RepGate {
    pub fn new(hold_threshold_ms: f64, rep_cooldown_ms: f64) -> Self {
        Self {
            hold_threshold_ms,
            rep_cooldown_ms,
        }
    }

    /// Held long enough since arming
    pub fn held(&self, phase: &Phase, now: f64) -> bool {
        phase.is_armed()
            && phase
                .hold_start
                .map_or(false, |start| now - start >= self.hold_threshold_ms)
    }

    /// Far enough from the previous rep (always true before the first rep)
    pub fn cooled_down(&self, last_rep_time: Option<f64>, now: f64) -> bool {
        last_rep_time.map_or(true, |last| now - last >= self.rep_cooldown_ms)
    }

    /// Both guards pass for this phase
    pub fn accepts(&self, phase: &Phase, last_rep_time: Option<f64>, now: f64) -> bool {
        self.held(phase, now) && self.cooled_down(last_rep_time, now)
    }
}

impl Default for RepGate {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_THRESHOLD_MS, DEFAULT_REP_COOLDOWN_MS)
    }
}
