//! RepBot Web - pose-landmark rep counting for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
pub mod engine;
pub mod exercises;
pub mod pose;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    configure_engine, end_session, exercise_types, process_landmarks, rep_count, reset_session,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!(
        "✅ Rep engine ready ({} exercises)",
        engine::ExerciseType::ALL.len()
    );
}

/// Milliseconds since the epoch, for callers without a frame timestamp
#[wasm_bindgen]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
