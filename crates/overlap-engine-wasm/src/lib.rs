//! WASM bindings for overlap-engine.
//!
//! Exposes availability intersection and schedule validation to JavaScript via
//! `wasm-bindgen`. Schedules cross the boundary as JSON strings in the same
//! shape the store persists: `{"Monday":[{"start":540,"end":1020}]}`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p overlap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/overlap-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/overlap_engine_wasm.wasm
//! ```

use overlap_engine::{codec, DaySchedule, Interval, MissingDayPolicy};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: errors and JSON crossing the boundary
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn schedule_to_json(schedule: &DaySchedule) -> Result<String, JsValue> {
    codec::encode_schedule(schedule).map_err(js_err)
}

fn parse_interval(json: &str) -> Result<Interval, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid interval JSON: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Intersect a JSON array of schedules, dropping days any schedule lacks.
///
/// Returns the common schedule as a JSON string. An empty array yields `{}`.
#[wasm_bindgen(js_name = "intersectAll")]
pub fn intersect_all(schedules_json: &str) -> Result<String, JsValue> {
    let schedules = codec::decode_schedules(schedules_json).map_err(js_err)?;
    schedule_to_json(&overlap_engine::intersect_all(&schedules))
}

/// Intersect a JSON array of schedules under a missing-day policy
/// (`"drop"` or `"carry"`).
#[wasm_bindgen(js_name = "intersectAllWith")]
pub fn intersect_all_with(schedules_json: &str, policy: &str) -> Result<String, JsValue> {
    let policy: MissingDayPolicy = policy.parse().map_err(js_err)?;
    let schedules = codec::decode_schedules(schedules_json).map_err(js_err)?;
    schedule_to_json(&overlap_engine::intersect_all_with(&schedules, policy))
}

/// Overlap of two `{start, end}` intervals.
///
/// Returns the overlapping interval as JSON, or `"null"` when the intervals
/// share no point in time (touching intervals included).
#[wasm_bindgen(js_name = "intersectPair")]
pub fn intersect_pair(a_json: &str, b_json: &str) -> Result<String, JsValue> {
    let a = parse_interval(a_json)?;
    let b = parse_interval(b_json)?;
    serde_json::to_string(&overlap_engine::intersect_pair(&a, &b))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Decode and validate one schedule. Returns the normalized JSON (days in
/// week order) on success.
#[wasm_bindgen(js_name = "validateSchedule")]
pub fn validate_schedule(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = codec::decode_schedule(schedule_json).map_err(js_err)?;
    schedule_to_json(&schedule)
}
