//! Generic two-phase rep engine
//!
//! Per frame: the descriptor reports start/completion signals, start signals
//! arm their phase unconditionally, and a completion counts only when the
//! phase is armed and the hold and cooldown guards both pass.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::exercises::ExerciseDescriptor;
use crate::pose::Frame;

use super::event::{AngleValue, RepEvent};
use super::gate::RepGate;
use super::reading::{LimbSignal, PoseReading};
use super::state::{ExerciseState, Limb, Stage};

/// Shown when required landmarks are missing or unusable
pub const UNCLEAR_POSE_FEEDBACK: &str = "Position not clear - make sure your whole body is in view";

/// Run one frame through the engine. Never fails: unusable frames leave
/// `state` untouched and report neutral feedback.
pub fn process_frame(
    descriptor: &dyn ExerciseDescriptor,
    gate: &RepGate,
    min_visibility: f32,
    state: &mut ExerciseState,
    frame: &Frame,
    now: f64,
) -> RepEvent {
    let reading = match descriptor.read(&frame.view(min_visibility)) {
        Ok(reading) => reading,
        Err(err) => {
            if err.is_unclear_pose() {
                debug!(exercise = %state.exercise, error = %err, "pose unclear, state unchanged");
            } else {
                warn!(exercise = %state.exercise, error = %err, "frame rejected");
            }
            return event(state, UNCLEAR_POSE_FEEDBACK.to_string(), BTreeMap::new());
        }
    };

    let counted = advance(state, &reading.signals, gate, now);
    if counted {
        info!(
            exercise = %state.exercise,
            reps = state.rep_counter,
            "rep counted"
        );
    }

    let feedback = compose_feedback(counted, descriptor.rep_feedback(), &reading);
    let angles = reading
        .angles
        .into_iter()
        .map(|(label, value)| (label.to_string(), value))
        .collect();
    event(state, feedback, angles)
}

/// Apply the signals to the state machine. Returns whether a rep counted.
fn advance(state: &mut ExerciseState, signals: &[LimbSignal], gate: &RepGate, now: f64) -> bool {
    for signal in signals.iter().filter(|s| s.start) {
        state.phase_mut(signal.limb).arm(now);
        // A limb back in its start pose also re-arms the whole exercise
        if signal.limb != Limb::Body {
            state.phase.arm(now);
        }
    }

    let completing: Vec<Limb> = signals
        .iter()
        .filter(|s| s.complete && gate.accepts(state.phase(s.limb), state.last_rep_time, now))
        .map(|s| s.limb)
        .collect();

    if completing.is_empty() {
        return false;
    }

    state.rep_counter += 1;
    state.last_rep_time = Some(now);
    state.phase.stage = Stage::Complete;
    for limb in completing {
        state.phase_mut(limb).stage = Stage::Complete;
    }
    true
}

/// Rep message (with any form warning), else warning, else hint
fn compose_feedback(counted: bool, rep_feedback: &str, reading: &PoseReading) -> String {
    match (counted, reading.warning) {
        (true, Some(warning)) => format!("{} {}", rep_feedback, warning),
        (true, None) => rep_feedback.to_string(),
        (false, Some(warning)) => warning.to_string(),
        (false, None) => reading.hint.unwrap_or_default().to_string(),
    }
}

fn event(
    state: &ExerciseState,
    feedback: String,
    angles: BTreeMap<String, AngleValue>,
) -> RepEvent {
    RepEvent {
        rep_counter: state.rep_counter,
        stage: state.exercise.stage_label(state.stage()).to_string(),
        feedback,
        angles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{ExerciseRegistry, ExerciseType};
    use crate::pose::fixtures::{
        curl_frame, floor_frame, lunge_frame, open_frame, plank_frame, press_frame, squat_frame,
        standing_frame, LEFT_OVERHEAD, LEFT_RACKED, RIGHT_OVERHEAD, RIGHT_RACKED,
    };
    use crate::pose::{LEFT_ELBOW, RIGHT_ELBOW};
    use proptest::prelude::*;

    fn run(
        registry: &ExerciseRegistry,
        state: &mut ExerciseState,
        frames: &[(f64, Frame)],
    ) -> Vec<RepEvent> {
        frames
            .iter()
            .map(|(t, frame)| registry.process(state, frame, *t))
            .collect()
    }

    fn timeline(start: f64, end: f64, step: f64, frame: &Frame) -> Vec<(f64, Frame)> {
        let mut frames = Vec::new();
        let mut t = start;
        while t <= end {
            frames.push((t, frame.clone()));
            t += step;
        }
        frames
    }

    #[test]
    fn test_bicep_curl_sequence_counts_one() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::BicepCurl);

        let mut frames = timeline(0.0, 600.0, 100.0, &curl_frame(170.0));
        frames.extend(timeline(700.0, 1700.0, 100.0, &curl_frame(20.0)));
        let events = run(&registry, &mut state, &frames);

        let first_up = events.iter().position(|e| e.rep_counter == 1).unwrap();
        // Last extended frame at 600 ms, first curled frame 500 ms later
        assert_eq!(frames[first_up].0, 1100.0);
        assert_eq!(events[first_up].feedback, "Good curl!");
        assert_eq!(events[first_up].stage, "up");

        let last = events.last().unwrap();
        assert_eq!(last.rep_counter, 1);
        assert_eq!(last.stage, "up");
        assert_eq!(state.last_rep_time, Some(1100.0));
    }

    #[test]
    fn test_double_completion_counts_once() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::BicepCurl);
        let frames = [
            (0.0, curl_frame(170.0)),
            (600.0, curl_frame(20.0)),
            (800.0, curl_frame(20.0)),
        ];
        let events = run(&registry, &mut state, &frames);
        assert_eq!(events[1].rep_counter, 1);
        assert_eq!(events[2].rep_counter, 1);
    }

    #[test]
    fn test_missing_elbows_leave_state_unchanged() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::BicepCurl);
        registry.process(&mut state, &curl_frame(170.0), 0.0);
        let before = state.clone();

        let mut frame = curl_frame(20.0);
        frame.remove(LEFT_ELBOW);
        frame.remove(RIGHT_ELBOW);
        let event = registry.process(&mut state, &frame, 900.0);

        assert_eq!(state, before);
        assert_eq!(event.rep_counter, 0);
        assert_eq!(event.feedback, UNCLEAR_POSE_FEEDBACK);
        assert!(event.angles.is_empty());
    }

    #[test]
    fn test_squat_sequence() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::Squat);

        let mut frames = vec![(0.0, squat_frame(170.0, 0.5))];
        frames.extend(timeline(100.0, 700.0, 100.0, &squat_frame(100.0, 0.7)));
        frames.push((800.0, squat_frame(170.0, 0.5)));
        let events = run(&registry, &mut state, &frames);

        // Counted at 500 ms, held through 700 ms without a second rep
        assert_eq!(events[5].rep_counter, 1);
        assert_eq!(events[5].feedback, "Great squat!");
        assert_eq!(events[5].stage, "down");
        assert_eq!(events[7].rep_counter, 1);

        let last = events.last().unwrap();
        assert_eq!(last.rep_counter, 1);
        assert_eq!(last.stage, "up");
        assert!(last.angles.contains_key("leftKnee"));
        assert!(last.angles.contains_key("rightKnee"));
    }

    #[test]
    fn test_held_completion_counts_once() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::Squat);
        let mut frames = vec![(0.0, squat_frame(170.0, 0.5))];
        frames.extend(timeline(600.0, 3_000.0, 33.0, &squat_frame(100.0, 0.7)));
        run(&registry, &mut state, &frames);
        assert_eq!(state.rep_counter, 1);
    }

    #[test]
    fn test_cooldown_blocks_quick_second_rep() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::Squat);
        let frames = [
            (0.0, squat_frame(170.0, 0.5)),
            (500.0, squat_frame(100.0, 0.7)),
            (600.0, squat_frame(170.0, 0.5)),
            // Held long enough but only 700 ms after the first rep
            (1_200.0, squat_frame(100.0, 0.7)),
            (1_600.0, squat_frame(100.0, 0.7)),
        ];
        let events = run(&registry, &mut state, &frames);
        assert_eq!(events[1].rep_counter, 1);
        assert_eq!(events[3].rep_counter, 1);
        assert_eq!(events[4].rep_counter, 2);
    }

    #[test]
    fn test_completion_without_start_pose_never_counts() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::Squat);
        let frames = timeline(0.0, 5_000.0, 100.0, &squat_frame(100.0, 0.7));
        run(&registry, &mut state, &frames);
        assert_eq!(state.rep_counter, 0);
    }

    #[test]
    fn test_one_hidden_elbow_leaves_state_unchanged() {
        let registry = ExerciseRegistry::default();
        let mut state = ExerciseState::new(ExerciseType::BicepCurl);
        registry.process(&mut state, &curl_frame(170.0), 0.0);
        let before = state.clone();

        let mut curled = curl_frame(20.0);
        curled.remove(LEFT_ELBOW);
        let event = registry.process(&mut state, &curled, 900.0);
        assert_eq!(state, before);
        assert_eq!(event.rep_counter, 0);
        assert_eq!(event.stage, "down");
        assert_eq!(event.feedback, UNCLEAR_POSE_FEEDBACK);
        assert!(event.angles.is_empty());

        let mut mid_curl = curl_frame(90.0);
        mid_curl.remove(RIGHT_ELBOW);
        let event = registry.process(&mut state, &mid_curl, 1_000.0);
        assert_eq!(state, before);
        assert_eq!(event.feedback, UNCLEAR_POSE_FEEDBACK);
    }

    /// Start and completion poses for every exercise, with the rep message
    /// and the stage label shown after counting
    fn rep_poses() -> Vec<(ExerciseType, Frame, Frame, &'static str, &'static str)> {
        vec![
            (ExerciseType::BicepCurl, curl_frame(170.0), curl_frame(20.0), "Good curl!", "up"),
            (
                ExerciseType::Squat,
                squat_frame(170.0, 0.5),
                squat_frame(100.0, 0.7),
                "Great squat!",
                "down",
            ),
            (
                ExerciseType::Pushup,
                plank_frame(170.0, 0.52),
                plank_frame(80.0, 0.52),
                "Nice push-up!",
                "down",
            ),
            (
                ExerciseType::ShoulderPress,
                press_frame(LEFT_RACKED, RIGHT_RACKED),
                press_frame(LEFT_OVERHEAD, RIGHT_OVERHEAD),
                "Strong press!",
                "up",
            ),
            (ExerciseType::Situp, floor_frame(170.0), floor_frame(60.0), "Good sit-up!", "up"),
            (ExerciseType::JumpingJacks, standing_frame(), open_frame(), "Nice jack!", "open"),
            (ExerciseType::Lunge, squat_frame(170.0, 0.5), lunge_frame(), "Great lunge!", "down"),
        ]
    }

    #[test]
    fn test_every_exercise_counts_through_hold_and_cooldown() {
        let registry = ExerciseRegistry::default();
        for (exercise, start, complete, message, stage) in rep_poses() {
            let mut state = ExerciseState::new(exercise);
            let frames = [
                (0.0, start.clone()),
                // Too soon after arming
                (300.0, complete.clone()),
                (600.0, complete.clone()),
                // Still in the completion pose, not re-armed
                (700.0, complete.clone()),
                (1_000.0, start.clone()),
                // Held long enough but inside the cooldown
                (1_550.0, complete.clone()),
                (1_700.0, complete.clone()),
            ];
            let events = run(&registry, &mut state, &frames);
            let counts: Vec<u32> = events.iter().map(|e| e.rep_counter).collect();
            assert_eq!(counts, vec![0, 0, 1, 1, 1, 1, 2], "{}", exercise);
            assert_eq!(events[2].feedback, message, "{}", exercise);
            assert_eq!(events[2].stage, stage, "{}", exercise);
            assert_eq!(events[4].stage, exercise.stage_label(Stage::Start), "{}", exercise);
        }
    }

    #[test]
    fn test_feedback_priority() {
        let reading = PoseReading::new()
            .warn_if(true, "Keep your body in a straight line")
            .hint("Go lower");
        assert_eq!(
            compose_feedback(true, "Nice push-up!", &reading),
            "Nice push-up! Keep your body in a straight line"
        );
        assert_eq!(
            compose_feedback(false, "Nice push-up!", &reading),
            "Keep your body in a straight line"
        );
        assert_eq!(compose_feedback(false, "x", &PoseReading::new().hint("Go lower")), "Go lower");
        assert_eq!(compose_feedback(false, "x", &PoseReading::new()), "");
    }

    fn frame_pool() -> Vec<Frame> {
        let mut hidden = curl_frame(20.0);
        hidden.remove(LEFT_ELBOW);
        hidden.remove(RIGHT_ELBOW);
        let mut pool = vec![curl_frame(90.0), squat_frame(60.0, 0.75), hidden];
        for (_, start, complete, _, _) in rep_poses() {
            pool.push(start);
            pool.push(complete);
        }
        pool
    }

    proptest! {
        #[test]
        fn prop_rep_counter_never_decreases(
            exercise in 0usize..ExerciseType::ALL.len(),
            steps in prop::collection::vec((any::<prop::sample::Index>(), 0u32..1_500), 1..160),
        ) {
            let registry = ExerciseRegistry::default();
            let pool = frame_pool();
            let mut state = ExerciseState::new(ExerciseType::ALL[exercise]);
            let mut now = 0.0;
            let mut previous = 0;
            for (index, delta) in steps {
                now += delta as f64;
                let event = registry.process(&mut state, &pool[index.index(pool.len())], now);
                prop_assert!(event.rep_counter >= previous);
                prop_assert!(event.rep_counter <= previous + 1);
                prop_assert_eq!(event.rep_counter, state.rep_counter);
                previous = event.rep_counter;
            }
        }
    }
}
