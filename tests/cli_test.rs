//! Runs the `champion_redirect` binary against temporary mapping files.

use pretty_assertions::assert_eq;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn setup_mappings() -> tempfile::TempDir {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("championmaps.txt"),
        "lux Lux\nmf MissFortune\nww Warwick\n",
    )
    .unwrap();
    temp_dir
}

#[test]
fn resolve_prints_destinations() {
    let temp_dir = setup_mappings();
    let output = Command::new(env!("CARGO_BIN_EXE_champion_redirect"))
        .current_dir(temp_dir.path())
        .args(["resolve", "lux/sup", "MF/b", "ahri/feeder", "/"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "//champion.gg/champion/Lux/Support",
            "//champion.gg/champion/MissFortune/ADC",
            "//champion.gg/champion/ahri",
            "//champion.gg",
        ]
    );
}

#[test]
fn resolve_json_output() {
    let temp_dir = setup_mappings();
    let output = Command::new(env!("CARGO_BIN_EXE_champion_redirect"))
        .current_dir(temp_dir.path())
        .args(["resolve", "--json", "ww/jg"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "path": "ww/jg",
            "champion": "Warwick",
            "role": "Jungle",
            "destination": "//champion.gg/champion/Warwick/Jungle",
        }])
    );
}

#[test]
fn explicit_mapping_flag() {
    let temp_dir = setup_mappings();
    let mappings = temp_dir.path().join("championmaps.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_champion_redirect"))
        .args(["resolve", "lux"])
        .arg("--mappings")
        .arg(&mappings)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "//champion.gg/champion/Lux");
}

#[test]
fn missing_mapping_file_is_tool_error() {
    let temp_dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_champion_redirect"))
        .current_dir(temp_dir.path())
        .args(["resolve", "lux"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("championmaps.txt"), "stderr: {stderr}");
}

#[test]
fn malformed_mapping_file_is_tool_error() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("championmaps.txt"), "lux\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_champion_redirect"))
        .current_dir(temp_dir.path())
        .args(["serve", "--bind", "127.0.0.1:0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
