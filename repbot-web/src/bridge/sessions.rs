//! Session store and JS bridge
//!
//! Receives flat MediaPipe landmark arrays from JavaScript, runs them through
//! the per-session engine and hands back JSON outcomes.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::engine::{
    EngineConfig, EngineError, ExerciseType, FrameOutcome, Result, SessionRegistry, Stage,
};
use crate::pose::Frame;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSIONS: RefCell<SessionRegistry> = RefCell::new(SessionRegistry::default());
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Catalog entry describing one supported exercise
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub start_stage: &'static str,
    pub complete_stage: &'static str,
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per camera frame with a flat Float32Array
/// (33 landmarks × 4 values: x, y, z, visibility). Returns the JSON outcome.
#[wasm_bindgen]
pub fn process_landmarks(
    session_id: &str,
    exercise_type: &str,
    data: &[f32],
    now_ms: f64,
) -> std::result::Result<String, JsValue> {
    let outcome = SESSIONS
        .with(|cell| handle_frame(&mut cell.borrow_mut(), session_id, exercise_type, data, now_ms))
        .map_err(|err| {
            web_sys::console::warn_1(&format!("process_landmarks: {}", err).into());
            err
        })?;
    serde_json::to_string(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Zero a session's counter and timers
#[wasm_bindgen]
pub fn reset_session(session_id: &str) -> std::result::Result<(), JsValue> {
    SESSIONS.with(|cell| cell.borrow_mut().reset(session_id))?;
    Ok(())
}

/// Drop a session, returning its final rep count
#[wasm_bindgen]
pub fn end_session(session_id: &str) -> std::result::Result<u32, JsValue> {
    Ok(SESSIONS.with(|cell| cell.borrow_mut().end(session_id))?)
}

#[wasm_bindgen]
pub fn rep_count(session_id: &str) -> std::result::Result<u32, JsValue> {
    Ok(SESSIONS.with(|cell| cell.borrow().rep_count(session_id))?)
}

/// Replace engine thresholds from a (partial) JSON object
#[wasm_bindgen]
pub fn configure_engine(json: &str) -> std::result::Result<(), JsValue> {
    SESSIONS.with(|cell| apply_config(&mut cell.borrow_mut(), json))?;
    Ok(())
}

/// JSON array of supported exercises for the exercise picker
#[wasm_bindgen]
pub fn exercise_types() -> std::result::Result<String, JsValue> {
    serde_json::to_string(&exercise_catalog()).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub fn handle_frame(
    sessions: &mut SessionRegistry,
    session_id: &str,
    exercise_type: &str,
    data: &[f32],
    now_ms: f64,
) -> Result<FrameOutcome> {
    let frame = Frame::from_flat(data)?;
    sessions.process(session_id, exercise_type, &frame, now_ms)
}

pub fn apply_config(sessions: &mut SessionRegistry, json: &str) -> Result<()> {
    sessions.configure(EngineConfig::from_json(json)?);
    Ok(())
}

pub fn exercise_catalog() -> Vec<ExerciseInfo> {
    ExerciseType::ALL
        .iter()
        .map(|exercise| ExerciseInfo {
            key: exercise.as_str(),
            name: exercise.display_name(),
            start_stage: exercise.stage_label(Stage::Start),
            complete_stage: exercise.stage_label(Stage::Complete),
        })
        .collect()
}
