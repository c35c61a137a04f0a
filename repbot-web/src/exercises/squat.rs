//! Squat - average knee angle plus hip height

use serde::{Deserialize, Serialize};

use crate::engine::{PoseReading, Result};
use crate::pose::{FrameView, LEFT_HIP, LEFT_LEG, RIGHT_HIP, RIGHT_LEG};

use super::{average, ExerciseDescriptor};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Squat {
    /// Standing: knee angle above this
    pub start_knee_angle: f32,
    /// Standing: hips above this image height (y below)
    pub start_max_hip_height: f32,
    /// Bottom: knee angle below this
    pub complete_knee_angle: f32,
    /// Bottom: hips below this image height (y above)
    pub complete_min_hip_height: f32,
}

impl Default for Squat {
    fn default() -> Self {
        Self {
            start_knee_angle: 160.0,
            start_max_hip_height: 0.6,
            complete_knee_angle: 120.0,
            complete_min_hip_height: 0.65,
        }
    }
}

impl ExerciseDescriptor for Squat {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let left = pose.joint(LEFT_LEG)?;
        let right = pose.joint(RIGHT_LEG)?;
        let knee_angle = average(left, right);
        let hip_height = average(pose.point(LEFT_HIP)?.1, pose.point(RIGHT_HIP)?.1);

        let start = knee_angle > self.start_knee_angle && hip_height < self.start_max_hip_height;
        let complete =
            knee_angle < self.complete_knee_angle && hip_height > self.complete_min_hip_height;

        let reading = PoseReading::new()
            .angle("leftKnee", left, pose.point(LEFT_LEG[1])?)
            .angle("rightKnee", right, pose.point(RIGHT_LEG[1])?)
            .body(start, complete);

        Ok(if start {
            reading.hint("Squat down")
        } else if !complete && knee_angle < self.start_knee_angle {
            reading.hint("Go lower")
        } else {
            reading
        })
    }

    fn rep_feedback(&self) -> &'static str {
        "Great squat!"
    }
}
