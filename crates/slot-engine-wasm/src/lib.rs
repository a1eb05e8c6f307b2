//! WASM bindings for slot-engine.
//!
//! Exposes slot editing, gap computation, and schedule matching to the
//! browser-side availability picker via `wasm-bindgen`. All schedule data
//! crosses the boundary as JSON strings in the persistence shape:
//! `[{"day": "monday", "slots": ["09:00-12:00"]}]`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use slot_engine::{common_availability, free_gaps, TimeInterval, WeekSchedule, Weekday};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs into engine types
// ---------------------------------------------------------------------------

fn parse_schedule(json: &str) -> Result<WeekSchedule, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))
}

fn parse_day(day: &str) -> Result<Weekday, JsValue> {
    day.parse().map_err(|e: slot_engine::SlotError| JsValue::from_str(&e.to_string()))
}

fn parse_slot(slot: &str) -> Result<TimeInterval, JsValue> {
    slot.parse()
        .map_err(|e: slot_engine::SlotError| JsValue::from_str(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Add a slot to a schedule, merging it into that day's availability.
///
/// `schedule_json` is the schedule in the persistence shape; `day` is a day
/// name ("monday" or "mon"); `slot` is a `"HH:00-HH:00"` range. Returns the
/// updated schedule JSON.
#[wasm_bindgen(js_name = "addSlot")]
pub fn add_slot(schedule_json: &str, day: &str, slot: &str) -> Result<String, JsValue> {
    let mut week = parse_schedule(schedule_json)?;
    week.add(parse_day(day)?, parse_slot(slot)?);
    to_json(&week)
}

/// Remove a previously stored slot from a schedule.
///
/// Removal is by exact value: a slot that is not stored leaves the schedule
/// unchanged. A day whose last slot is removed disappears from the result.
#[wasm_bindgen(js_name = "removeSlot")]
pub fn remove_slot(schedule_json: &str, day: &str, slot: &str) -> Result<String, JsValue> {
    let mut week = parse_schedule(schedule_json)?;
    week.remove(parse_day(day)?, parse_slot(slot)?);
    to_json(&week)
}

/// Intersect two schedules into their common availability.
///
/// Both arguments are schedule JSON. Returns the schedule of times present in
/// both, with day entries only where something is shared.
#[wasm_bindgen(js_name = "matchSchedules")]
pub fn match_schedules(a_json: &str, b_json: &str) -> Result<String, JsValue> {
    let a = parse_schedule(a_json)?;
    let b = parse_schedule(b_json)?;
    to_json(&common_availability(&a, &b))
}

/// Compute the free gaps a slot list leaves inside a window.
///
/// `slots_json` is a JSON array of `"HH:00-HH:00"` strings; `window` is a
/// single `"HH:00-HH:00"` range. Returns a JSON array of gap strings.
#[wasm_bindgen(js_name = "freeGaps")]
pub fn free_gaps_in(slots_json: &str, window: &str) -> Result<String, JsValue> {
    let slots: Vec<TimeInterval> = serde_json::from_str(slots_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid slots JSON: {}", e)))?;
    let window = parse_slot(window)?;
    to_json(&free_gaps(&slots, window))
}
