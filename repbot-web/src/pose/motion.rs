//! Movement tracking with inactivity timeout
//!
//! Compares key landmarks against the previous frame. Small displacements
//! count as jitter; a long run of still frames plus an elapsed timeout marks
//! the user as inactive so the host page can prompt or leave the session.

use serde::{Deserialize, Serialize};

use super::angles::distance;
use super::landmarks::{Frame, Point, KEY_LANDMARKS};

/// Motion monitor thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    /// Displacement (normalized units) a key landmark must exceed between frames
    pub movement_threshold: f32,
    /// Consecutive still frames before inactivity is considered
    pub max_still_frames: u32,
    /// Time without activity before the user is reported inactive
    pub inactivity_timeout_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            movement_threshold: 0.05,
            max_still_frames: 150,
            inactivity_timeout_ms: 180_000.0,
        }
    }
}

/// Movement classification for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    Moving,
    Still,
    Inactive,
}

/// Per-session motion tracker
#[derive(Clone, Debug)]
pub struct MotionMonitor {
    /// Key landmark positions from the previous frame
    previous: Option<[Option<Point>; KEY_LANDMARKS.len()]>,
    /// Consecutive frames without movement
    still_frames: u32,
    /// Timestamp of the last movement or completed rep
    last_activity: Option<f64>,
}

impl MotionMonitor {
    pub fn new() -> Self {
        Self {
            previous: None,
            still_frames: 0,
            last_activity: None,
        }
    }

    /// Record activity that does not show up as landmark motion (a counted rep)
    pub fn mark_active(&mut self, now: f64) {
        self.still_frames = 0;
        self.last_activity = Some(now);
    }

    /// Update with a new frame, returns the activity classification
    pub fn update(&mut self, frame: &Frame, now: f64, config: &MotionConfig) -> Activity {
        let current = Self::key_points(frame);
        let last_activity = *self.last_activity.get_or_insert(now);

        let Some(previous) = self.previous.replace(current) else {
            return Activity::Moving;
        };

        let moved = previous.iter().zip(current.iter()).any(|pair| match pair {
            (Some(old), Some(new)) => distance(*old, *new) > config.movement_threshold,
            _ => false,
        });

        if moved {
            self.mark_active(now);
            return Activity::Moving;
        }

        self.still_frames = self.still_frames.saturating_add(1);
        if self.still_frames >= config.max_still_frames
            && now - last_activity >= config.inactivity_timeout_ms
        {
            Activity::Inactive
        } else {
            Activity::Still
        }
    }

    pub fn still_frames(&self) -> u32 {
        self.still_frames
    }

    /// Clear history (exercise switch or explicit reset)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn key_points(frame: &Frame) -> [Option<Point>; KEY_LANDMARKS.len()] {
        let mut points = [None; KEY_LANDMARKS.len()];
        for (slot, &index) in points.iter_mut().zip(KEY_LANDMARKS.iter()) {
            *slot = frame
                .get(index)
                .filter(|lm| lm.x.is_finite() && lm.y.is_finite())
                .map(|lm| lm.point());
        }
        points
    }
}

impl Default for MotionMonitor {
    fn default() -> Self {
        Self::new()
    }
}
