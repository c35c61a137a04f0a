//! Error types for the rep engine

use thiserror::Error;

/// Rep engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    // Frame errors (recovered per frame)
    #[error("Landmark {index} missing or not visible")]
    MissingLandmark { index: usize },

    #[error("Degenerate geometry at landmark {vertex}")]
    DegenerateGeometry { vertex: usize },

    // Caller errors
    #[error("Unknown exercise type: {0}")]
    InvalidExerciseType(String),

    #[error("Invalid landmark data: expected {expected}+ values in groups of 4, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

impl EngineError {
    /// Frame-level problems the engine absorbs without touching state
    pub fn is_unclear_pose(&self) -> bool {
        matches!(
            self,
            EngineError::MissingLandmark { .. } | EngineError::DegenerateGeometry { .. }
        )
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
