//! Joint angle calculation using dot product
//!
//! Calculates the angle at a joint B using vectors B→A and B→C,
//! e.g. shoulder-elbow-wrist for the elbow or hip-knee-ankle for the knee.

use super::landmarks::Point;

/// Vectors shorter than this are treated as a missing or duplicated landmark
const MIN_SEGMENT: f32 = 1e-6;

/// Angle at `b` in degrees, in [0, 180]
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns 0 when either segment has zero length. Threshold logic must not
/// read that as a real angle; use [`try_joint_angle`] there.
pub fn joint_angle(a: Point, b: Point, c: Point) -> f32 {
    try_joint_angle(a, b, c).unwrap_or(0.0)
}

/// Angle at `b` in degrees, or `None` for degenerate geometry
pub fn try_joint_angle(a: Point, b: Point, c: Point) -> Option<f32> {
    // Vector from vertex to first point
    let v1 = (a.0 - b.0, a.1 - b.1);

    // Vector from vertex to second point
    let v2 = (c.0 - b.0, c.1 - b.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    if !(mag1 > MIN_SEGMENT && mag2 > MIN_SEGMENT) {
        return None;
    }

    // Clamp absorbs floating point overshoot past ±1
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);

    Some(cos_angle.acos().to_degrees())
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

pub fn midpoint(a: Point, b: Point) -> Point {
    ((a.0 + b.0) * 0.5, (a.1 + b.1) * 0.5)
}

/// Angle of segment a→b against the horizontal axis, folded into [0, 90]
///
/// 0° = level, 90° = vertical.
pub fn tilt_from_horizontal(a: Point, b: Point) -> f32 {
    let dx = (b.0 - a.0).abs();
    let dy = (b.1 - a.1).abs();
    if dx < MIN_SEGMENT && dy < MIN_SEGMENT {
        return 0.0;
    }
    dy.atan2(dx).to_degrees()
}
