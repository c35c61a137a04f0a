//! Lunge - knee angle per leg and the height gap between the knees
//!
//! The front leg is the one whose knee sits higher in the image (smaller y);
//! the back knee drops toward the floor.

use serde::{Deserialize, Serialize};

use crate::engine::{PoseReading, Result};
use crate::pose::{FrameView, LEFT_KNEE, LEFT_LEG, RIGHT_KNEE, RIGHT_LEG};

use super::ExerciseDescriptor;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Lunge {
    /// Standing: both knee angles above this
    pub start_leg_angle: f32,
    /// Standing: knees level within this height difference
    pub start_max_knee_gap: f32,
    /// Bottom: front knee angle below this
    pub front_knee_angle: f32,
    /// Bottom: back knee angle above this
    pub back_knee_angle: f32,
    /// Bottom: knees at least this far apart in height
    pub complete_min_knee_gap: f32,
}

impl Default for Lunge {
    fn default() -> Self {
        Self {
            start_leg_angle: 150.0,
            start_max_knee_gap: 0.1,
            front_knee_angle: 110.0,
            back_knee_angle: 130.0,
            complete_min_knee_gap: 0.2,
        }
    }
}

impl ExerciseDescriptor for Lunge {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let left = pose.joint(LEFT_LEG)?;
        let right = pose.joint(RIGHT_LEG)?;
        let left_knee = pose.point(LEFT_KNEE)?;
        let right_knee = pose.point(RIGHT_KNEE)?;
        let knee_gap = (left_knee.1 - right_knee.1).abs();

        let (front, back) = if left_knee.1 <= right_knee.1 {
            (left, right)
        } else {
            (right, left)
        };

        let start = left > self.start_leg_angle
            && right > self.start_leg_angle
            && knee_gap < self.start_max_knee_gap;
        let complete = front < self.front_knee_angle
            && back > self.back_knee_angle
            && knee_gap > self.complete_min_knee_gap;

        let reading = PoseReading::new()
            .angle("leftKnee", left, left_knee)
            .angle("rightKnee", right, right_knee)
            .body(start, complete);

        Ok(if start {
            reading.hint("Step forward and lower")
        } else if !complete && knee_gap <= self.complete_min_knee_gap {
            reading.hint("Drop your back knee")
        } else {
            reading
        })
    }

    fn rep_feedback(&self) -> &'static str {
        "Great lunge!"
    }
}
