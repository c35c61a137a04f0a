//! Pose module - landmark frames, joint geometry and motion tracking
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod landmarks;
mod motion;

#[cfg(test)]
pub(crate) mod fixtures;

pub use angles::{joint_angle, try_joint_angle, distance, midpoint, tilt_from_horizontal};
pub use landmarks::{
    Frame, FrameView, Landmark, Point,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    LEFT_ARM, RIGHT_ARM, LEFT_LEG, RIGHT_LEG, LEFT_TORSO, RIGHT_TORSO,
    KEY_LANDMARKS, POSE_LANDMARK_COUNT, MIN_FRAME_LANDMARKS, LANDMARK_STRIDE,
};
pub use motion::{Activity, MotionConfig, MotionMonitor};
