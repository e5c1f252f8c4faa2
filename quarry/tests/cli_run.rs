//! CLI tests for the `quarry` binary.
//!
//! Spawns the binary in a temp directory and checks exit codes and the JSON
//! outcome printed on stdout.

use std::fs;
use std::process::Command;

use quarry::exit_codes;
use quarry::io::config::{QuarryConfig, SimConfig, load_config, write_config};

fn small_config() -> QuarryConfig {
    QuarryConfig {
        side_length: 4,
        sim: SimConfig {
            depth: 2,
            ..SimConfig::default()
        },
        ..QuarryConfig::default()
    }
}

#[test]
fn init_writes_loadable_default_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = Command::new(env!("CARGO_BIN_EXE_quarry"))
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("quarry init");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let cfg = load_config(&temp.path().join("quarry.toml")).expect("load");
    assert_eq!(cfg, QuarryConfig::default());
}

#[test]
fn run_prints_outcome_and_writes_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(&temp.path().join("quarry.toml"), &small_config()).expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_quarry"))
        .current_dir(temp.path())
        .args(["run", "--report", "out/report.json"])
        .output()
        .expect("quarry run");
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse stdout");
    assert_eq!(outcome["stop"]["kind"], "floor_reached");
    assert_eq!(outcome["stats"]["layers_completed"], 2);
    assert_eq!(outcome["position"]["x"], 0);

    let report = fs::read_to_string(temp.path().join("out/report.json")).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&report).expect("parse report");
    assert_eq!(report["side_length"], 4);
    assert_eq!(report["outcome"], outcome);
}

#[test]
fn run_without_fuel_exits_with_fuel_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut cfg = small_config();
    cfg.sim.fuel_stock = 0;
    write_config(&temp.path().join("quarry.toml"), &cfg).expect("write config");

    let status = Command::new(env!("CARGO_BIN_EXE_quarry"))
        .current_dir(temp.path())
        .args(["run", "--fuel", "10"])
        .status()
        .expect("quarry run");
    assert_eq!(status.code(), Some(exit_codes::FUEL_EXHAUSTED));
}

#[test]
fn validate_rejects_invalid_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("quarry.toml"), "side_length = 0\n").expect("write");

    let status = Command::new(env!("CARGO_BIN_EXE_quarry"))
        .current_dir(temp.path())
        .arg("validate")
        .status()
        .expect("quarry validate");
    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
