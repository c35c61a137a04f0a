//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod sessions;

pub use sessions::{
    process_landmarks,
    reset_session,
    end_session,
    rep_count,
    configure_engine,
    exercise_types,
};
