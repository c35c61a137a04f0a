//! Bicep curl - elbow angle per arm, each arm counted independently
//!
//! Both arms must be readable; a frame with either elbow triple missing is
//! reported as unclear and never advances a phase.

use serde::{Deserialize, Serialize};

use crate::engine::{Limb, PoseReading, Result};
use crate::pose::{FrameView, LEFT_ARM, RIGHT_ARM};

use super::ExerciseDescriptor;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BicepCurl {
    /// Arm extended: elbow angle at or above this (degrees)
    pub start_angle: f32,
    /// Arm curled: elbow angle below this (degrees)
    pub complete_angle: f32,
}

impl Default for BicepCurl {
    fn default() -> Self {
        Self {
            start_angle: 150.0,
            complete_angle: 40.0,
        }
    }
}

impl ExerciseDescriptor for BicepCurl {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let mut reading = PoseReading::new();
        let mut curling = false;

        for (limb, arm, label) in [
            (Limb::Left, LEFT_ARM, "leftElbow"),
            (Limb::Right, RIGHT_ARM, "rightElbow"),
        ] {
            let angle = pose.joint(arm)?;
            let elbow = pose.point(arm[1])?;

            let start = angle >= self.start_angle;
            let complete = angle < self.complete_angle;
            curling |= !start && !complete;

            reading = reading
                .angle(label, angle, elbow)
                .limb(limb, start, complete);
        }

        if reading.any_start() {
            reading = reading.hint("Curl the weight up");
        } else if curling {
            reading = reading.hint("Squeeze all the way up");
        }
        Ok(reading)
    }

    fn rep_feedback(&self) -> &'static str {
        "Good curl!"
    }
}
