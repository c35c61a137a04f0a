//! Per-session bookkeeping - exercise state, rep edge and motion per session id

use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::pose::{Activity, Frame, MotionMonitor};

use super::config::EngineConfig;
use super::error::{EngineError, Result};
use super::event::{RepCompleted, RepEmitter, RepEvent};
use super::exercise::ExerciseRegistry;
use super::state::ExerciseState;

/// Everything the host needs after one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutcome {
    pub event: RepEvent,
    /// Set only on the frame a rep was counted
    pub rep_completed: Option<RepCompleted>,
    pub activity: Activity,
}

/// One user's workout
#[derive(Clone, Debug)]
pub struct Session {
    pub state: ExerciseState,
    pub emitter: RepEmitter,
    pub motion: MotionMonitor,
}

impl Session {
    fn new(state: ExerciseState) -> Self {
        Self {
            state,
            emitter: RepEmitter::new(),
            motion: MotionMonitor::new(),
        }
    }
}

/// Sessions keyed by id, sharing one engine configuration
#[derive(Debug, Default)]
pub struct SessionRegistry {
    registry: ExerciseRegistry,
    sessions: HashMap<String, Session>,
}

impl SessionRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: ExerciseRegistry::new(config),
            sessions: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.registry.config()
    }

    /// Swap thresholds; running sessions keep their counts
    pub fn configure(&mut self, config: EngineConfig) {
        self.registry = ExerciseRegistry::new(config);
    }

    /// Run one frame for a session. Creates the session on first use and
    /// starts from zero whenever the exercise key changes.
    pub fn process(
        &mut self,
        session_id: &str,
        exercise_key: &str,
        frame: &Frame,
        now: f64,
    ) -> Result<FrameOutcome> {
        let exercise = ExerciseRegistry::resolve(exercise_key).map_err(|err| {
            warn!(session = session_id, key = exercise_key, "unknown exercise type");
            err
        })?;

        let session = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                info!(session = session_id, exercise = %exercise, "session created");
                Session::new(ExerciseState::new(exercise))
            });

        if session.state.exercise != exercise {
            info!(
                session = session_id,
                from = session.state.exercise.display_name(),
                to = exercise.display_name(),
                "exercise changed, count reset"
            );
            *session = Session::new(ExerciseState::new(exercise));
        }

        let event = self.registry.process(&mut session.state, frame, now);
        let rep_completed = session.emitter.observe(event.rep_counter);

        let mut activity = session.motion.update(frame, now, &self.registry.config().motion);
        if rep_completed.is_some() {
            session.motion.mark_active(now);
            activity = Activity::Moving;
        }

        Ok(FrameOutcome {
            event,
            rep_completed,
            activity,
        })
    }

    /// Zero the counter, timers and rep edge
    pub fn reset(&mut self, session_id: &str) -> Result<()> {
        let session = self.session_mut(session_id)?;
        session.state.reset();
        session.emitter.reset();
        session.motion.reset();
        info!(session = session_id, "session reset");
        Ok(())
    }

    /// Drop a session and return its final count
    pub fn end(&mut self, session_id: &str) -> Result<u32> {
        let session = self
            .sessions
            .remove(session_id)
            .ok_or_else(|| EngineError::SessionNotFound(session_id.to_string()))?;
        info!(
            session = session_id,
            exercise = session.state.exercise.display_name(),
            reps = session.state.rep_counter,
            "session ended"
        );
        Ok(session.state.rep_counter)
    }

    pub fn rep_count(&self, session_id: &str) -> Result<u32> {
        self.session(session_id).map(|s| s.state.rep_counter)
    }

    pub fn session(&self, session_id: &str) -> Result<&Session> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| EngineError::SessionNotFound(session_id.to_string()))
    }

    fn session_mut(&mut self, session_id: &str) -> Result<&mut Session> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| EngineError::SessionNotFound(session_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
