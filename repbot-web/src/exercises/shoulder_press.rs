//! Shoulder press - average elbow angle and wrist height against the shoulders

use serde::{Deserialize, Serialize};

use crate::engine::{PoseReading, Result};
use crate::pose::{
    FrameView, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};

use super::{average, ExerciseDescriptor};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShoulderPress {
    /// Racked: elbow angle below this with both wrists under the shoulders
    pub start_elbow_angle: f32,
    /// Pressed: elbow angle above this with both wrists overhead
    pub complete_elbow_angle: f32,
    /// Pressed with only one wrist overhead: elbow angle above this
    pub single_arm_lockout_angle: f32,
}

impl Default for ShoulderPress {
    fn default() -> Self {
        Self {
            start_elbow_angle: 100.0,
            complete_elbow_angle: 140.0,
            single_arm_lockout_angle: 150.0,
        }
    }
}

impl ExerciseDescriptor for ShoulderPress {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let left = pose.angle(LEFT_WRIST, LEFT_ELBOW, LEFT_SHOULDER)?;
        let right = pose.angle(RIGHT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER)?;
        let elbow_angle = average(left, right);

        // Image y grows downward
        let left_above = pose.point(LEFT_WRIST)?.1 < pose.point(LEFT_SHOULDER)?.1;
        let right_above = pose.point(RIGHT_WRIST)?.1 < pose.point(RIGHT_SHOULDER)?.1;
        let both_above = left_above && right_above;
        let one_above = left_above != right_above;

        let start = elbow_angle < self.start_elbow_angle && !left_above && !right_above;
        let complete = elbow_angle > self.complete_elbow_angle
            && (both_above || (one_above && elbow_angle > self.single_arm_lockout_angle));

        let reading = PoseReading::new()
            .angle("leftElbow", left, pose.point(LEFT_ELBOW)?)
            .angle("rightElbow", right, pose.point(RIGHT_ELBOW)?)
            .body(start, complete)
            .warn_if(complete && one_above, "Press evenly with both arms");

        Ok(if start {
            reading.hint("Press overhead")
        } else {
            reading
        })
    }

    fn rep_feedback(&self) -> &'static str {
        "Strong press!"
    }
}
