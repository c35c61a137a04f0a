//! Jumping jacks - arm, leg and abduction angles on both sides
//!
//! Closed and open poses each need all four conditions on both sides.
//! Anything in between is transitional and leaves the stage alone.

use serde::{Deserialize, Serialize};

use crate::engine::{PoseReading, Result};
use crate::pose::{
    FrameView, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};

use super::ExerciseDescriptor;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JumpingJacks {
    /// Arms kept straight: elbow angle above this in both poses
    pub min_arm_angle: f32,
    /// Legs kept straight: knee angle above this in both poses
    pub min_leg_angle: f32,
    /// Closed: arm raised less than this from the torso (hip-shoulder-elbow)
    pub closed_max_shoulder_abduction: f32,
    /// Closed: leg spread less than this (other hip-hip-knee, 90 = together)
    pub closed_max_hip_abduction: f32,
    /// Open: arm raised more than this
    pub open_min_shoulder_abduction: f32,
    /// Open: leg spread more than this
    pub open_min_hip_abduction: f32,
}

impl Default for JumpingJacks {
    fn default() -> Self {
        Self {
            min_arm_angle: 130.0,
            min_leg_angle: 150.0,
            closed_max_shoulder_abduction: 45.0,
            closed_max_hip_abduction: 100.0,
            open_min_shoulder_abduction: 120.0,
            open_min_hip_abduction: 105.0,
        }
    }
}

/// Joint indices for one side of the body
struct Side {
    shoulder: usize,
    elbow: usize,
    wrist: usize,
    hip: usize,
    other_hip: usize,
    knee: usize,
    ankle: usize,
}

const LEFT: Side = Side {
    shoulder: LEFT_SHOULDER,
    elbow: LEFT_ELBOW,
    wrist: LEFT_WRIST,
    hip: LEFT_HIP,
    other_hip: RIGHT_HIP,
    knee: LEFT_KNEE,
    ankle: LEFT_ANKLE,
};

const RIGHT: Side = Side {
    shoulder: RIGHT_SHOULDER,
    elbow: RIGHT_ELBOW,
    wrist: RIGHT_WRIST,
    hip: RIGHT_HIP,
    other_hip: LEFT_HIP,
    knee: RIGHT_KNEE,
    ankle: RIGHT_ANKLE,
};

/// Angles measured on one side
#[derive(Clone, Copy, Debug)]
struct SideAngles {
    arm: f32,
    shoulder_abduction: f32,
    leg: f32,
    hip_abduction: f32,
}

impl SideAngles {
    fn measure(pose: &FrameView<'_>, side: &Side) -> Result<Self> {
        Ok(Self {
            arm: pose.angle(side.shoulder, side.elbow, side.wrist)?,
            shoulder_abduction: pose.angle(side.hip, side.shoulder, side.elbow)?,
            leg: pose.angle(side.hip, side.knee, side.ankle)?,
            hip_abduction: pose.angle(side.other_hip, side.hip, side.knee)?,
        })
    }
}

impl JumpingJacks {
    fn is_closed(&self, s: &SideAngles) -> bool {
        s.arm > self.min_arm_angle
            && s.leg > self.min_leg_angle
            && s.shoulder_abduction < self.closed_max_shoulder_abduction
            && s.hip_abduction < self.closed_max_hip_abduction
    }

    fn is_open(&self, s: &SideAngles) -> bool {
        s.arm > self.min_arm_angle
            && s.leg > self.min_leg_angle
            && s.shoulder_abduction > self.open_min_shoulder_abduction
            && s.hip_abduction > self.open_min_hip_abduction
    }
}

impl ExerciseDescriptor for JumpingJacks {
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading> {
        let left = SideAngles::measure(pose, &LEFT)?;
        let right = SideAngles::measure(pose, &RIGHT)?;

        let start = self.is_closed(&left) && self.is_closed(&right);
        let complete = self.is_open(&left) && self.is_open(&right);

        let reading = PoseReading::new()
            .angle("leftShoulder", left.shoulder_abduction, pose.point(LEFT_SHOULDER)?)
            .angle("rightShoulder", right.shoulder_abduction, pose.point(RIGHT_SHOULDER)?)
            .angle("leftHip", left.hip_abduction, pose.point(LEFT_HIP)?)
            .angle("rightHip", right.hip_abduction, pose.point(RIGHT_HIP)?)
            .angle("leftElbow", left.arm, pose.point(LEFT_ELBOW)?)
            .angle("rightElbow", right.arm, pose.point(RIGHT_ELBOW)?)
            .angle("leftKnee", left.leg, pose.point(LEFT_KNEE)?)
            .angle("rightKnee", right.leg, pose.point(RIGHT_KNEE)?)
            .body(start, complete);

        let arms_bent = left.arm <= self.min_arm_angle || right.arm <= self.min_arm_angle;
        Ok(if arms_bent {
            reading.hint("Keep your arms straight")
        } else if start {
            reading.hint("Jump out wide")
        } else {
            reading
        })
    }

    fn rep_feedback(&self) -> &'static str {
        "Nice jack!"
    }
}
