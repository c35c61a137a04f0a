//! Frame builders shared by unit tests

use super::landmarks::*;

/// Upright, arms hanging, facing the camera. Every landmark fully visible.
pub fn standing_frame() -> Frame {
    let filler = Landmark::new(0.5, 0.1).with_visibility(0.99);
    let mut frame = Frame::new(vec![filler; POSE_LANDMARK_COUNT]);
    let points: [(usize, Point); 13] = [
        (NOSE, (0.50, 0.15)),
        (LEFT_SHOULDER, (0.58, 0.30)),
        (RIGHT_SHOULDER, (0.42, 0.30)),
        (LEFT_ELBOW, (0.60, 0.42)),
        (RIGHT_ELBOW, (0.40, 0.42)),
        (LEFT_WRIST, (0.61, 0.54)),
        (RIGHT_WRIST, (0.39, 0.54)),
        (LEFT_HIP, (0.55, 0.55)),
        (RIGHT_HIP, (0.45, 0.55)),
        (LEFT_KNEE, (0.55, 0.72)),
        (RIGHT_KNEE, (0.45, 0.72)),
        (LEFT_ANKLE, (0.55, 0.89)),
        (RIGHT_ANKLE, (0.45, 0.89)),
    ];
    for (index, (x, y)) in points {
        frame.set(index, Landmark::new(x, y).with_visibility(0.99));
    }
    frame
}

/// Place a `[a, vertex, c]` chain: `a` at `anchor`, the vertex `len` away
/// along `dir`, and `c` `len` away from the vertex at `angle_deg`.
pub fn place_joint(
    frame: &mut Frame,
    triple: [usize; 3],
    anchor: Point,
    dir: Point,
    len: f32,
    angle_deg: f32,
) {
    let mag = (dir.0 * dir.0 + dir.1 * dir.1).sqrt();
    let d = (dir.0 / mag, dir.1 / mag);
    let vertex = (anchor.0 + d.0 * len, anchor.1 + d.1 * len);

    // Rotate the vertex→anchor direction by the requested angle
    let back = (-d.0, -d.1);
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let out = (back.0 * cos - back.1 * sin, back.0 * sin + back.1 * cos);
    let end = (vertex.0 + out.0 * len, vertex.1 + out.1 * len);

    frame.set(triple[0], Landmark::new(anchor.0, anchor.1).with_visibility(0.99));
    frame.set(triple[1], Landmark::new(vertex.0, vertex.1).with_visibility(0.99));
    frame.set(triple[2], Landmark::new(end.0, end.1).with_visibility(0.99));
}

/// Arm hanging from its shoulder with the given elbow angle
pub fn set_arm(frame: &mut Frame, arm: [usize; 3], elbow_angle: f32) {
    let shoulder = frame.get(arm[0]).map(|lm| lm.point()).unwrap_or((0.5, 0.3));
    place_joint(frame, arm, shoulder, (0.0, 1.0), 0.12, elbow_angle);
}

/// Both arms with the same elbow angle
pub fn set_arms(frame: &mut Frame, elbow_angle: f32) {
    set_arm(frame, LEFT_ARM, elbow_angle);
    set_arm(frame, RIGHT_ARM, elbow_angle);
}

/// Both legs with hips at `hip_y` and the given knee angle
pub fn set_legs(frame: &mut Frame, knee_angle: f32, hip_y: f32) {
    place_joint(frame, LEFT_LEG, (0.55, hip_y), (0.0, 1.0), 0.15, knee_angle);
    place_joint(frame, RIGHT_LEG, (0.45, hip_y), (0.0, 1.0), 0.15, knee_angle);
}

/// Frame with a standing body and both elbows at `elbow_angle`
pub fn curl_frame(elbow_angle: f32) -> Frame {
    let mut frame = standing_frame();
    set_arms(&mut frame, elbow_angle);
    frame
}

/// Frame with a standing upper body and the given knee angle / hip height
pub fn squat_frame(knee_angle: f32, hip_y: f32) -> Frame {
    let mut frame = standing_frame();
    set_legs(&mut frame, knee_angle, hip_y);
    frame
}

/// Shoulder press arm as `(elbow, wrist)`
pub type PressArm = (Point, Point);

pub const LEFT_RACKED: PressArm = ((0.68, 0.32), (0.66, 0.40));
pub const RIGHT_RACKED: PressArm = ((0.32, 0.32), (0.34, 0.40));
pub const LEFT_OVERHEAD: PressArm = ((0.64, 0.20), (0.66, 0.08));
pub const RIGHT_OVERHEAD: PressArm = ((0.36, 0.20), (0.34, 0.08));
pub const RIGHT_OUT_WIDE: PressArm = ((0.30, 0.30), (0.18, 0.31));

/// Standing frame with explicit elbow and wrist positions
pub fn press_frame(left: PressArm, right: PressArm) -> Frame {
    let mut frame = standing_frame();
    for (index, (x, y)) in [
        (LEFT_ELBOW, left.0),
        (LEFT_WRIST, left.1),
        (RIGHT_ELBOW, right.0),
        (RIGHT_WRIST, right.1),
    ] {
        frame.set(index, Landmark::new(x, y).with_visibility(0.99));
    }
    frame
}

/// Lying on the floor, head to the left, torso angle at the hips
pub fn floor_frame(torso_angle: f32) -> Frame {
    let mut frame = standing_frame();
    place_joint(&mut frame, LEFT_TORSO, (0.20, 0.80), (1.0, 0.0), 0.25, torso_angle);
    place_joint(&mut frame, RIGHT_TORSO, (0.20, 0.81), (1.0, 0.0), 0.25, torso_angle);
    frame
}

/// Plank facing left with the given elbow angle and hip height
pub fn plank_frame(elbow_angle: f32, hip_y: f32) -> Frame {
    let mut frame = standing_frame();
    place_joint(&mut frame, LEFT_ARM, (0.30, 0.50), (0.0, 1.0), 0.12, elbow_angle);
    place_joint(&mut frame, RIGHT_ARM, (0.31, 0.50), (0.0, 1.0), 0.12, elbow_angle);
    frame.set(LEFT_HIP, Landmark::new(0.60, hip_y).with_visibility(0.9));
    frame.set(RIGHT_HIP, Landmark::new(0.61, hip_y).with_visibility(0.9));
    frame
}

/// Jumping jack apex: arms overhead and legs spread, mirrored around x = 0.5
pub fn open_frame() -> Frame {
    let mut frame = standing_frame();
    let points = [
        (LEFT_SHOULDER, 0.58, 0.30),
        (LEFT_ELBOW, 0.68, 0.20),
        (LEFT_WRIST, 0.76, 0.10),
        (LEFT_HIP, 0.55, 0.55),
        (LEFT_KNEE, 0.62, 0.71),
        (LEFT_ANKLE, 0.69, 0.87),
    ];
    for (index, x, y) in points {
        frame.set(index, Landmark::new(x, y).with_visibility(0.99));
        // Right landmarks sit at the left index + 1
        frame.set(index + 1, Landmark::new(1.0 - x, y).with_visibility(0.99));
    }
    frame
}

/// Bottom of a lunge: left leg forward and bent, right knee low behind
pub fn lunge_frame() -> Frame {
    let mut frame = squat_frame(170.0, 0.5);
    place_joint(&mut frame, LEFT_LEG, (0.55, 0.50), (0.0, 1.0), 0.12, 95.0);
    place_joint(&mut frame, RIGHT_LEG, (0.45, 0.50), (0.0, 1.0), 0.35, 140.0);
    frame
}
