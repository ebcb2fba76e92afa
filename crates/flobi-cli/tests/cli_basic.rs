//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "flobi-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_progression_output() {
    let (code, stdout, _) = run_cli(&["progression", "--xp", "700"]);
    assert_eq!(code, 0, "progression failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["level"], 2);
    assert_eq!(parsed["stage"], "bush");
    assert_eq!(parsed["next_level_at"], 1000);
}

#[test]
fn test_progression_at_zero() {
    let (code, stdout, _) = run_cli(&["progression", "--xp", "0"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["level"], 1);
    assert_eq!(parsed["stage"], "seed");
}

#[test]
fn test_catalog_shop_lists_four_items() {
    let (code, stdout, _) = run_cli(&["catalog", "shop"]);
    assert_eq!(code, 0, "catalog shop failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);
}

#[test]
fn test_catalog_offline_lists_challenges() {
    let (code, stdout, _) = run_cli(&["catalog", "offline"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
    assert_eq!(parsed[0]["id"], "clean_room");
}

#[test]
fn test_mission_generate_offline() {
    let (code, stdout, _) = run_cli(&[
        "mission", "generate", "--kind", "daily", "--offline",
    ]);
    assert_eq!(code, 0, "mission generate failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["kind"], "daily");
    assert_eq!(parsed["questions"].as_array().unwrap().len(), 5);
}

#[test]
fn test_mission_generate_rejects_unknown_kind() {
    let (code, _, stderr) = run_cli(&["mission", "generate", "--kind", "chess", "--offline"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown mission kind"));
}
