//! Engine configuration - timing guards, visibility gate and every threshold
//!
//! All fields have defaults, so a JSON override only needs the values it
//! changes: `{"repCooldownMs": 800, "squat": {"completeKneeAngle": 110}}`.

use serde::{Deserialize, Serialize};

use crate::exercises::{BicepCurl, JumpingJacks, Lunge, Pushup, ShoulderPress, Situp, Squat};
use crate::pose::MotionConfig;

use super::error::Result;
use super::gate::{RepGate, DEFAULT_HOLD_THRESHOLD_MS, DEFAULT_REP_COOLDOWN_MS};

/// Default visibility a landmark needs before it is used
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Start pose must precede a completion by at least this long (ms)
    pub hold_threshold_ms: f64,
    /// Minimum spacing between counted reps (ms)
    pub rep_cooldown_ms: f64,
    pub min_visibility: f32,
    pub motion: MotionConfig,

    pub bicep_curl: BicepCurl,
    pub squat: Squat,
    pub pushup: Pushup,
    pub shoulder_press: ShoulderPress,
    pub situp: Situp,
    pub jumping_jacks: JumpingJacks,
    pub lunge: Lunge,
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn gate(&self) -> RepGate {
        RepGate::new(self.hold_threshold_ms, self.rep_cooldown_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: DEFAULT_HOLD_THRESHOLD_MS,
            rep_cooldown_ms: DEFAULT_REP_COOLDOWN_MS,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            motion: MotionConfig::default(),
            bicep_curl: BicepCurl::default(),
            squat: Squat::default(),
            pushup: Pushup::default(),
            shoulder_press: ShoulderPress::default(),
            situp: Situp::default(),
            jumping_jacks: JumpingJacks::default(),
            lunge: Lunge::default(),
        }
    }
}
