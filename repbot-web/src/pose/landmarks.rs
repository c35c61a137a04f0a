//! Landmark frame model
//!
//! Holds one instant of MediaPipe Pose output and answers "where is joint N"
//! for the exercise descriptors, gating out absent or low-visibility points.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

use super::angles::try_joint_angle;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Landmarks MediaPipe Pose reports per frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Smallest frame that still covers every joint the exercises read (up to the ankles)
pub const MIN_FRAME_LANDMARKS: usize = 29;

/// Floats per landmark in the flat JS payload: x, y, z, visibility
pub const LANDMARK_STRIDE: usize = 4;

/// Head, shoulders, arms, hips and legs
pub const KEY_LANDMARKS: [usize; 13] = [
    NOSE,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
];

/// Joint triples (a, vertex, c) read by the exercise descriptors
pub const LEFT_ARM: [usize; 3] = [LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST];
pub const RIGHT_ARM: [usize; 3] = [RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST];
pub const LEFT_LEG: [usize; 3] = [LEFT_HIP, LEFT_KNEE, LEFT_ANKLE];
pub const RIGHT_LEG: [usize; 3] = [RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE];
pub const LEFT_TORSO: [usize; 3] = [LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE];
pub const RIGHT_TORSO: [usize; 3] = [RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE];

/// 2D point in normalized image coordinates
pub type Point = (f32, f32);

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single landmark (normalized coordinates, y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    /// Detector confidence that the joint is visible, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0, visibility: None }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn point(&self) -> Point {
        (self.x, self.y)
    }

    /// Finite coordinates and (when reported) visibility at or above `min_visibility`
    pub fn is_usable(&self, min_visibility: f32) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.visibility.map_or(true, |v| v >= min_visibility)
    }
}

/// All landmarks for one instant. Entries may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    landmarks: Vec<Option<Landmark>>,
}

impl Frame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self {
            landmarks: landmarks.into_iter().map(Some).collect(),
        }
    }

    /// Decode the flat `Float32Array` sent from JavaScript.
    ///
    /// Layout is `[x, y, z, visibility]` per landmark. A NaN x or y marks the
    /// landmark as absent.
    pub fn from_flat(data: &[f32]) -> Result<Self, EngineError> {
        let expected = MIN_FRAME_LANDMARKS * LANDMARK_STRIDE;
        if data.len() % LANDMARK_STRIDE != 0 || data.len() < expected {
            return Err(EngineError::InvalidFrame {
                expected,
                actual: data.len(),
            });
        }

        let landmarks = data
            .chunks_exact(LANDMARK_STRIDE)
            .map(|c| {
                if c[0].is_nan() || c[1].is_nan() {
                    None
                } else {
                    Some(Landmark {
                        x: c[0],
                        y: c[1],
                        z: c[2],
                        visibility: if c[3].is_nan() { None } else { Some(c[3]) },
                    })
                }
            })
            .collect();

        Ok(Self { landmarks })
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index).and_then(Option::as_ref)
    }

    /// Replace one landmark, growing the frame if needed
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if index >= self.landmarks.len() {
            self.landmarks.resize(index + 1, None);
        }
        self.landmarks[index] = Some(landmark);
    }

    /// Mark a landmark as not detected
    pub fn remove(&mut self, index: usize) {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = None;
        }
    }

    /// Read-only view that rejects landmarks below `min_visibility`
    pub fn view(&self, min_visibility: f32) -> FrameView<'_> {
        FrameView {
            frame: self,
            min_visibility,
        }
    }
}

/// Visibility-gated accessor handed to the exercise descriptors
#[derive(Clone, Copy)]
pub struct FrameView<'a> {
    frame: &'a Frame,
    min_visibility: f32,
}

impl<'a> FrameView<'a> {
    /// Position of a usable landmark
    pub fn point(&self, index: usize) -> Result<Point, EngineError> {
        match self.frame.get(index) {
            Some(lm) if lm.is_usable(self.min_visibility) => Ok(lm.point()),
            _ => Err(EngineError::MissingLandmark { index }),
        }
    }

    /// Angle at landmark `b` formed with `a` and `c`, in degrees
    pub fn angle(&self, a: usize, b: usize, c: usize) -> Result<f32, EngineError> {
        let (pa, pb, pc) = (self.point(a)?, self.point(b)?, self.point(c)?);
        try_joint_angle(pa, pb, pc).ok_or(EngineError::DegenerateGeometry { vertex: b })
    }

    /// Angle for a `[a, vertex, c]` triple
    pub fn joint(&self, triple: [usize; 3]) -> Result<f32, EngineError> {
        self.angle(triple[0], triple[1], triple[2])
    }
}
