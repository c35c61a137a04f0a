//! Exercise descriptors - which angles to measure and when a pose counts
//!
//! Each descriptor only evaluates its start/completion predicates for a
//! frame. Stage changes, timing and counting live in the generic engine.

mod bicep_curl;
mod jumping_jacks;
mod lunge;
mod pushup;
mod shoulder_press;
mod situp;
mod squat;

pub use bicep_curl::BicepCurl;
pub use jumping_jacks::JumpingJacks;
pub use lunge::Lunge;
pub use pushup::Pushup;
pub use shoulder_press::ShoulderPress;
pub use situp::Situp;
pub use squat::Squat;

use crate::engine::{PoseReading, Result};
use crate::pose::FrameView;

/// Signal extraction and predicates for one exercise
pub trait ExerciseDescriptor {
    /// Measure this frame. Missing landmarks or degenerate geometry are
    /// returned as errors and leave the session untouched.
    fn read(&self, pose: &FrameView<'_>) -> Result<PoseReading>;

    /// Feedback shown when a rep is counted
    fn rep_feedback(&self) -> &'static str {
        "Good rep!"
    }
}

/// Mean of left and right measurements
pub(crate) fn average(left: f32, right: f32) -> f32 {
    (left + right) * 0.5
}
