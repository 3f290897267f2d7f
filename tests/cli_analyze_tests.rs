//! Integration tests for `riftlens analyze`
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

mod utils;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use utils::{fixture, frame, timeline};

fn riftlens() -> Command {
    Command::cargo_bin("riftlens").unwrap()
}

#[test]
fn test_analyze_json_output() {
    let output = riftlens()
        .arg("analyze")
        .arg(fixture("timeline_sample.json"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["macro_score"], 50.0);
    let tilt = parsed["tilt_index"].as_f64().unwrap();
    assert!((tilt - 75.424_723_326_565).abs() < 1e-6);
    assert_eq!(parsed["positions"].as_array().unwrap().len(), 4);
    assert!(parsed.get("error").is_none());
}

#[test]
fn test_analyze_text_output() {
    riftlens()
        .arg("analyze")
        .arg(fixture("timeline_sample.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("macro score:  50.00%"))
        .stdout(predicate::str::contains("deaths:       4"))
        .stdout(predicate::str::contains("frames:       4"));
}

#[test]
fn test_analyze_other_participant() {
    let output = riftlens()
        .args(["--format", "json", "analyze", "-p", "6"])
        .arg(fixture("timeline_sample.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    // Participant 6 is near the dragon in frames 1 and 3
    assert_eq!(parsed["macro_score"], 50.0);
    assert_eq!(parsed["tilt_index"], 0.0);
}

#[test]
fn test_analyze_missing_info_is_degraded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let output = riftlens()
        .args(["analyze", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["error"], "timeline data missing");
    assert_eq!(parsed["macro_score"], 0.0);
    assert_eq!(parsed["tilt_index"], 0.0);
    assert!(parsed["positions"].as_array().unwrap().is_empty());
}

#[test]
fn test_analyze_missing_events_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let doc = serde_json::json!({"info": {"frames": [{"participantFrames": {}}]}});
    fs::write(&path, doc.to_string()).unwrap();

    riftlens()
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "analysis failed: malformed timeline: frame 0 has no events",
        ));
}

#[test]
fn test_analyze_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("riftlens.toml");
    fs::write(&config, "max_positions = 2\n").unwrap();

    let tl = dir.path().join("timeline.json");
    let frames = (0..5).map(|_| frame(9800.0, 4400.0, vec![])).collect();
    fs::write(&tl, timeline(frames).to_string()).unwrap();

    let output = riftlens()
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "analyze"])
        .arg(&tl)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["positions"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["macro_score"], 100.0);
}

#[test]
fn test_analyze_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "objective_radius = -1.0\n").unwrap();

    riftlens()
        .arg("--config")
        .arg(&config)
        .arg("analyze")
        .arg(fixture("timeline_sample.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("objective_radius"));
}

#[test]
fn test_analyze_missing_file_fails() {
    riftlens()
        .args(["analyze", "/nonexistent/timeline.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_analyze_invalid_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "not json").unwrap();

    riftlens()
        .arg("analyze")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_analyze_rejects_participant_out_of_range() {
    riftlens()
        .args(["analyze", "-p", "0"])
        .arg(fixture("timeline_sample.json"))
        .assert()
        .failure();
}

#[test]
fn test_debug_flag_writes_to_stderr() {
    let output = riftlens()
        .args(["--debug", "analyze"])
        .arg(fixture("timeline_sample.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("timeline analysed"),
        "No tracing output found in stderr: {}",
        stderr
    );
}

#[test]
fn test_debug_degraded_analysis_logged_as_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let output = riftlens()
        .args(["--debug", "analyze"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "expected a warning in stderr: {}", stderr);
    assert!(stderr.contains("analysis degraded"));
    assert!(stderr.contains("missing_info_section"));
}
