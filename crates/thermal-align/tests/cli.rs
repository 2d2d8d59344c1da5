//! Black-box tests of the `thermal-align` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn write_json(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn calibrate_reports_the_probe_in_layout_space() {
    let dir = tempfile::tempdir().expect("tempdir");
    let points = write_json(
        dir.path(),
        "points.json",
        r#"{
            "image_a": [[588, 135], [220, 387], [1175, 782]],
            "image_b": [[563, 160], [234, 396], [1105, 735]]
        }"#,
    );

    let output = Command::cargo_bin("thermal-align")
        .expect("binary")
        .args(["calibrate", "--points"])
        .arg(&points)
        .args(["--probe", "100,150"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(report["physical_scale"].as_f64(), Some(3.2));
    let probe = &report["probe"];
    assert_eq!(probe["thermal"], serde_json::json!([100.0, 150.0]));
    // Layout coordinates are finite numbers; exact values are covered by the
    // library regression tests.
    assert!(probe["layout"][0].as_f64().expect("x").is_finite());
    assert!(probe["layout"][1].as_f64().expect("y").is_finite());
}

#[test]
fn calibrate_auto_match_recovers_shuffled_points() {
    let dir = tempfile::tempdir().expect("tempdir");
    // image_b lists the same landmarks rotated one slot.
    let points = write_json(
        dir.path(),
        "points.json",
        r#"{
            "image_a": [[588, 135], [220, 387], [1175, 782]],
            "image_b": [[1105, 735], [563, 160], [234, 396]]
        }"#,
    );

    let shuffled = Command::cargo_bin("thermal-align")
        .expect("binary")
        .args(["calibrate", "--auto-match", "--points"])
        .arg(&points)
        .args(["--probe", "588,135"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // A correctly re-paired solve maps a calibration point onto its partner
    // (times the 3.2 physical scale).
    let report: Value = serde_json::from_slice(&shuffled).expect("json report");
    let x = report["probe"]["layout"][0].as_f64().expect("x");
    let y = report["probe"]["layout"][1].as_f64().expect("y");
    assert!((x - 563.0 * 3.2).abs() < 1e-6, "got x = {x}");
    assert!((y - 160.0 * 3.2).abs() < 1e-6, "got y = {y}");
}

#[test]
fn calibrate_rejects_too_few_points() {
    let dir = tempfile::tempdir().expect("tempdir");
    let points = write_json(
        dir.path(),
        "points.json",
        r#"{"image_a": [[0, 0], [1, 1]], "image_b": [[0, 0], [1, 1]]}"#,
    );

    Command::cargo_bin("thermal-align")
        .expect("binary")
        .args(["calibrate", "--points"])
        .arg(&points)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 3 calibration points"));
}

#[test]
fn query_finds_the_planted_maximum() {
    let dir = tempfile::tempdir().expect("tempdir");
    let field = write_json(
        dir.path(),
        "field.json",
        r#"[[1.0, 2.0, 3.0],
            [4.0, 42.5, 6.0],
            [7.0, 8.0, 9.0]]"#,
    );
    let region = write_json(
        dir.path(),
        "region.json",
        r#"{"cx": 1.0, "cy": 1.0, "half_w": 1.0, "half_h": 1.0}"#,
    );

    let output = Command::cargo_bin("thermal-align")
        .expect("binary")
        .args(["query", "--field"])
        .arg(&field)
        .arg("--region")
        .arg(&region)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let spot: Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(spot["value"].as_f64(), Some(42.5));
    assert_eq!(spot["x"].as_f64(), Some(1.0));
    assert_eq!(spot["y"].as_f64(), Some(1.0));
}

#[test]
fn query_rejects_a_ragged_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let field = write_json(dir.path(), "field.json", r#"[[1.0, 2.0], [3.0]]"#);
    let region = write_json(
        dir.path(),
        "region.json",
        r#"{"cx": 0.0, "cy": 0.0, "half_w": 1.0, "half_h": 1.0}"#,
    );

    Command::cargo_bin("thermal-align")
        .expect("binary")
        .args(["query", "--field"])
        .arg(&field)
        .arg("--region")
        .arg(&region)
        .assert()
        .failure();
}
