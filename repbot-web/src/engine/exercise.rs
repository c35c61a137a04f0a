//! Exercise keys - the closed set of movements the engine can count

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::exercises::ExerciseDescriptor;
use crate::pose::Frame;

use super::config::EngineConfig;
use super::error::EngineError;
use super::event::RepEvent;
use super::processor;
use super::state::{ExerciseState, Stage};

/// Supported exercises (wire keys are camelCase)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseType {
    BicepCurl,
    Squat,
    Pushup,
    ShoulderPress,
    Situp,
    JumpingJacks,
    Lunge,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 7] = [
        ExerciseType::BicepCurl,
        ExerciseType::Squat,
        ExerciseType::Pushup,
        ExerciseType::ShoulderPress,
        ExerciseType::Situp,
        ExerciseType::JumpingJacks,
        ExerciseType::Lunge,
    ];

    /// Key used by the JS side
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::BicepCurl => "bicepCurl",
            ExerciseType::Squat => "squat",
            ExerciseType::Pushup => "pushup",
            ExerciseType::ShoulderPress => "shoulderPress",
            ExerciseType::Situp => "situp",
            ExerciseType::JumpingJacks => "jumpingJacks",
            ExerciseType::Lunge => "lunge",
        }
    }

    /// Human readable name for logs and history entries
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseType::BicepCurl => "Bicep Curl",
            ExerciseType::Squat => "Squat",
            ExerciseType::Pushup => "Push-up",
            ExerciseType::ShoulderPress => "Shoulder Press",
            ExerciseType::Situp => "Sit-up",
            ExerciseType::JumpingJacks => "Jumping Jacks",
            ExerciseType::Lunge => "Lunge",
        }
    }

    /// Stage names shown to the user
    pub fn stage_label(&self, stage: Stage) -> &'static str {
        match (self, stage) {
            (ExerciseType::JumpingJacks, Stage::Start) => "closed",
            (ExerciseType::JumpingJacks, Stage::Complete) => "open",
            // Start pose at the top of the movement
            (ExerciseType::Squat | ExerciseType::Pushup | ExerciseType::Lunge, stage) => {
                match stage {
                    Stage::Start => "up",
                    Stage::Complete => "down",
                }
            }
            // Start pose at the bottom of the movement
            (_, Stage::Start) => "down",
            (_, Stage::Complete) => "up",
        }
    }

    /// Whether each arm keeps its own phase
    pub fn tracks_limbs(&self) -> bool {
        matches!(self, ExerciseType::BicepCurl)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = EngineError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        ExerciseType::ALL
            .into_iter()
            .find(|exercise| exercise.as_str() == key)
            .ok_or_else(|| EngineError::InvalidExerciseType(key.to_string()))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Maps exercise keys to their descriptors and runs the shared rep engine
#[derive(Clone, Debug, Default)]
pub struct ExerciseRegistry {
    config: EngineConfig,
}

impl ExerciseRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse a JS exercise key. Unknown keys are an error, never a fallback.
    pub fn resolve(key: &str) -> Result<ExerciseType, EngineError> {
        key.parse()
    }

    pub fn descriptor(&self, exercise: ExerciseType) -> &dyn ExerciseDescriptor {
        match exercise {
            ExerciseType::BicepCurl => &self.config.bicep_curl,
            ExerciseType::Squat => &self.config.squat,
            ExerciseType::Pushup => &self.config.pushup,
            ExerciseType::ShoulderPress => &self.config.shoulder_press,
            ExerciseType::Situp => &self.config.situp,
            ExerciseType::JumpingJacks => &self.config.jumping_jacks,
            ExerciseType::Lunge => &self.config.lunge,
        }
    }

    /// Advance `state` by one frame using the descriptor of its own exercise
    pub fn process(&self, state: &mut ExerciseState, frame: &Frame, now: f64) -> RepEvent {
        let descriptor = self.descriptor(state.exercise);
        processor::process_frame(
            descriptor,
            &self.config.gate(),
            self.config.min_visibility,
            state,
            frame,
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        for exercise in ExerciseType::ALL {
            assert_eq!(exercise.as_str().parse::<ExerciseType>().unwrap(), exercise);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        for key in ["tricepExtension", "calfRaises", "BicepCurl", ""] {
            match key.parse::<ExerciseType>() {
                Err(EngineError::InvalidExerciseType(k)) => assert_eq!(k, key),
                other => panic!("expected InvalidExerciseType for {:?}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_serde_matches_wire_keys() {
        for exercise in ExerciseType::ALL {
            let json = serde_json::to_string(&exercise).unwrap();
            assert_eq!(json, format!("\"{}\"", exercise.as_str()));
        }
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(ExerciseType::BicepCurl.stage_label(Stage::Start), "down");
        assert_eq!(ExerciseType::BicepCurl.stage_label(Stage::Complete), "up");
        assert_eq!(ExerciseType::Squat.stage_label(Stage::Start), "up");
        assert_eq!(ExerciseType::Squat.stage_label(Stage::Complete), "down");
        assert_eq!(ExerciseType::JumpingJacks.stage_label(Stage::Complete), "open");
    }

    #[test]
    fn test_registry_resolves_descriptor_per_exercise() {
        let registry = ExerciseRegistry::default();
        assert_eq!(ExerciseRegistry::resolve("lunge").unwrap(), ExerciseType::Lunge);
        assert!(matches!(
            ExerciseRegistry::resolve("plank"),
            Err(EngineError::InvalidExerciseType(_))
        ));
        assert_eq!(registry.descriptor(ExerciseType::Squat).rep_feedback(), "Great squat!");
        assert_eq!(registry.descriptor(ExerciseType::BicepCurl).rep_feedback(), "Good curl!");
    }
}
