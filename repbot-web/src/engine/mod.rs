//! Engine module - rep counting state machine, sessions and configuration
//!
//! Re-exports only. All logic in submodules.

mod config;
mod error;
mod event;
mod exercise;
mod gate;
mod processor;
mod reading;
mod session;
mod state;

pub use config::{EngineConfig, DEFAULT_MIN_VISIBILITY};
pub use error::{EngineError, Result};
pub use event::{AngleValue, Position, RepCompleted, RepEmitter, RepEvent};
pub use exercise::{ExerciseRegistry, ExerciseType};
pub use gate::{RepGate, DEFAULT_HOLD_THRESHOLD_MS, DEFAULT_REP_COOLDOWN_MS};
pub use processor::{process_frame, UNCLEAR_POSE_FEEDBACK};
pub use reading::{LimbSignal, PoseReading};
pub use session::{FrameOutcome, Session, SessionRegistry};
pub use state::{ExerciseState, Limb, LimbStages, Phase, Stage};
