// Integration test utilities
//
// Fixture lookup and small builders for timeline documents.

#![allow(dead_code)] // not every test binary uses every helper

use serde_json::{json, Value};
use std::path::PathBuf;

/// Path of a file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Frame with participant 1 at (x, y)
pub fn frame(x: f64, y: f64, events: Vec<Value>) -> Value {
    json!({
        "participantFrames": {"1": {"position": {"x": x, "y": y}}},
        "events": events
    })
}

/// Kill event with participant `victim` dying at `timestamp` ms
pub fn death(victim: u8, timestamp: u64) -> Value {
    json!({"type": "CHAMPION_KILL", "killerId": 7, "victimId": victim, "timestamp": timestamp})
}

pub fn timeline(frames: Vec<Value>) -> Value {
    json!({"info": {"frames": frames}})
}
