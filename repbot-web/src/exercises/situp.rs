//! Sit-up - average torso angle at the hips (shoulder-hip-knee)

use serde::{Deserialize, Serialize};

use crate::engine::{PoseReading, Result};
use crate::pose::{FrameView, LEFT_TORSO, RIGHT_TORSO};

use super::{average, ExerciseDescriptor};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Situp {
    /// Lying back: torso angle above this
    pub start_torso_angle: f32,
    /// Sitting up: torso angle below this
    pub complete_torso_angle: f32,
}

impl Default for Situp {
    fn default() -> Self {
        Self {
            start_torso_angle: 160.0,
            complete_torso_angle: 80.0,
        }
    }
}

impl ExerciseDescriptor for Situp {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let left = pose.joint(LEFT_TORSO)?;
        let right = pose.joint(RIGHT_TORSO)?;
        let torso_angle = average(left, right);

        let start = torso_angle > self.start_torso_angle;
        let complete = torso_angle < self.complete_torso_angle;

        let reading = PoseReading::new()
            .angle("leftHip", left, pose.point(LEFT_TORSO[1])?)
            .angle("rightHip", right, pose.point(RIGHT_TORSO[1])?)
            .body(start, complete);

        Ok(if start {
            reading.hint("Curl up")
        } else if !complete {
            reading.hint("Come all the way up")
        } else {
            reading
        })
    }

    fn rep_feedback(&self) -> &'static str {
        "Good sit-up!"
    }
}
