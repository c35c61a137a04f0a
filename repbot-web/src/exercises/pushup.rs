//! Push-up - average elbow angle, shoulder height and body line

use serde::{Deserialize, Serialize};

use crate::engine::{PoseReading, Result};
use crate::pose::{
    midpoint, tilt_from_horizontal, FrameView, LEFT_ARM, LEFT_HIP, LEFT_SHOULDER, RIGHT_ARM,
    RIGHT_HIP, RIGHT_SHOULDER,
};

use super::{average, ExerciseDescriptor};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pushup {
    /// Arms locked out: elbow angle above this
    pub start_elbow_angle: f32,
    /// Shoulders above this image height at the top
    pub start_max_shoulder_height: f32,
    /// Bottom: elbow angle below this
    pub complete_elbow_angle: f32,
    /// Shoulder-hip line may tilt this far from horizontal before warning
    pub max_body_tilt: f32,
}

impl Default for Pushup {
    fn default() -> Self {
        Self {
            start_elbow_angle: 160.0,
            start_max_shoulder_height: 0.7,
            complete_elbow_angle: 90.0,
            max_body_tilt: 15.0,
        }
    }
}

impl ExerciseDescriptor for Pushup {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let left = pose.joint(LEFT_ARM)?;
        let right = pose.joint(RIGHT_ARM)?;
        let elbow_angle = average(left, right);

        let (ls, rs) = (pose.point(LEFT_SHOULDER)?, pose.point(RIGHT_SHOULDER)?);
        let (lh, rh) = (pose.point(LEFT_HIP)?, pose.point(RIGHT_HIP)?);
        let shoulder_height = average(ls.1, rs.1);
        let shoulders = midpoint(ls, rs);
        let tilt = tilt_from_horizontal(shoulders, midpoint(lh, rh));

        let start = elbow_angle > self.start_elbow_angle
            && shoulder_height < self.start_max_shoulder_height;
        let complete = elbow_angle < self.complete_elbow_angle;

        let reading = PoseReading::new()
            .angle("leftElbow", left, pose.point(LEFT_ARM[1])?)
            .angle("rightElbow", right, pose.point(RIGHT_ARM[1])?)
            .angle("bodyLine", tilt, shoulders)
            .body(start, complete)
            .warn_if(tilt > self.max_body_tilt, "Keep your body in a straight line");

        Ok(if start {
            reading.hint("Lower your chest")
        } else if !complete {
            reading.hint("Go lower")
        } else {
            reading
        })
    }

    fn rep_feedback(&self) -> &'static str {
        "Nice push-up!"
    }
}
