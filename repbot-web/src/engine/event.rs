//! Per-frame output and rep-completed edge detection

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pose::Point;

/// Normalized image position an angle label should be drawn at
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Position {
    fn from((x, y): Point) -> Self {
        Self { x, y }
    }
}

/// One measured angle with the landmark it was measured at
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleValue {
    /// Degrees
    pub value: f32,
    pub position: Position,
}

/// Result of processing one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepEvent {
    pub rep_counter: u32,
    /// Exercise-specific stage label ("up", "down", ...)
    pub stage: String,
    pub feedback: String,
    /// Visualization only, never read back by the engine
    pub angles: BTreeMap<String, AngleValue>,
}

/// Emitted once per repCounter increment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepCompleted {
    pub rep_counter: u32,
}

/// Detects the rising edge of repCounter
#[derive(Clone, Debug, Default)]
pub struct RepEmitter {
    last_emitted: u32,
}

impl RepEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the last seen counter. Fires only when it increased;
    /// a lower value (explicit reset) resyncs silently.
    pub fn observe(&mut self, rep_counter: u32) -> Option<RepCompleted> {
        let fired = rep_counter > self.last_emitted;
        self.last_emitted = rep_counter;
        fired.then_some(RepCompleted { rep_counter })
    }

    pub fn last_emitted(&self) -> u32 {
        self.last_emitted
    }

    pub fn reset(&mut self) {
        self.last_emitted = 0;
    }
}
