//! Per-session exercise state - the only thing the engine mutates

use serde::{Deserialize, Serialize};

use super::exercise::ExerciseType;

/// Coarse phase of the motion cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    /// In (or returned to) the start pose; armed for the next rep
    #[default]
    Start,
    /// Completion pose reached and counted
    Complete,
}

/// Stage plus the time the start pose was last seen
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub stage: Stage,
    /// Last frame time (ms) the start pose held; `None` until first seen
    pub hold_start: Option<f64>,
}

impl Phase {
    /// Enter the start pose. Never throttled.
    pub fn arm(&mut self, now: f64) {
        self.stage = Stage::Start;
        self.hold_start = Some(now);
    }

    /// Armed and the start pose has been observed at least once
    pub fn is_armed(&self) -> bool {
        self.stage == Stage::Start && self.hold_start.is_some()
    }
}

/// Which part of the body a signal belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Limb {
    /// Whole-body signal (averaged or combined across sides)
    Body,
    Left,
    Right,
}

/// Independent left/right phases for exercises tracked per arm
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimbStages {
    pub left: Phase,
    pub right: Phase,
}

/// State for one `(session, exercise)` pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseState {
    pub exercise: ExerciseType,
    pub rep_counter: u32,
    #[serde(flatten)]
    pub phase: Phase,
    /// Time (ms) of the last counted rep; `None` before the first rep
    pub last_rep_time: Option<f64>,
    /// Per-arm phases, only for exercises counted per limb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_stages: Option<LimbStages>,
}

impl ExerciseState {
    /// Fresh zeroed state for an exercise
    pub fn new(exercise: ExerciseType) -> Self {
        Self {
            exercise,
            rep_counter: 0,
            phase: Phase::default(),
            last_rep_time: None,
            sub_stages: exercise.tracks_limbs().then(LimbStages::default),
        }
    }

    pub fn stage(&self) -> Stage {
        self.phase.stage
    }

    pub fn hold_start(&self) -> Option<f64> {
        self.phase.hold_start
    }

    /// Explicit reset: counter, timers and sub-stages back to zero
    pub fn reset(&mut self) {
        *self = Self::new(self.exercise);
    }

    /// Phase a limb signal drives. Limb signals fall back to the body phase
    /// for exercises without sub-stages.
    pub fn phase_mut(&mut self, limb: Limb) -> &mut Phase {
        match (limb, self.sub_stages.as_mut()) {
            (Limb::Left, Some(sub)) => &mut sub.left,
            (Limb::Right, Some(sub)) => &mut sub.right,
            _ => &mut self.phase,
        }
    }

    pub fn phase(&self, limb: Limb) -> &Phase {
        match (limb, self.sub_stages.as_ref()) {
            (Limb::Left, Some(sub)) => &sub.left,
            (Limb::Right, Some(sub)) => &sub.right,
            _ => &self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_zeroed() {
        let state = ExerciseState::new(ExerciseType::Squat);
        assert_eq!(state.rep_counter, 0);
        assert_eq!(state.stage(), Stage::Start);
        assert_eq!(state.hold_start(), None);
        assert_eq!(state.last_rep_time, None);
        assert!(state.sub_stages.is_none());
    }

    #[test]
    fn test_bicep_curl_has_sub_stages() {
        let state = ExerciseState::new(ExerciseType::BicepCurl);
        assert!(state.sub_stages.is_some());
    }

    #[test]
    fn test_phase_mut_routes_limbs() {
        let mut state = ExerciseState::new(ExerciseType::BicepCurl);
        state.phase_mut(Limb::Left).arm(100.0);
        assert_eq!(state.phase(Limb::Left).hold_start, Some(100.0));
        assert_eq!(state.phase(Limb::Right).hold_start, None);
        assert_eq!(state.hold_start(), None);

        let mut squat = ExerciseState::new(ExerciseType::Squat);
        squat.phase_mut(Limb::Left).arm(50.0);
        assert_eq!(squat.hold_start(), Some(50.0));
    }

    #[test]
    fn test_reset_keeps_exercise() {
        let mut state = ExerciseState::new(ExerciseType::Lunge);
        state.rep_counter = 7;
        state.phase.arm(10.0);
        state.last_rep_time = Some(5.0);
        state.reset();
        assert_eq!(state, ExerciseState::new(ExerciseType::Lunge));
    }

    #[test]
    fn test_serializes_camel_case() {
        let state = ExerciseState::new(ExerciseType::Situp);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["repCounter"], 0);
        assert_eq!(json["stage"], "start");
        assert_eq!(json["exercise"], "situp");
        assert!(json.get("subStages").is_none());
    }
}
