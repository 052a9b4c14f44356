use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn mealog(log_dir: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mealog"))
        .args(args)
        .env("MEALOG_LOG_DIR", log_dir.path())
        .env_remove("MEALOG_CALORIE_LIMIT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start mealog");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for mealog")
}

#[test]
fn test_replay_prints_json_snapshot() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("day.json");
    fs::write(
        &script,
        r#"[
            {"action": "log", "food": "rice", "calories": 300},
            {"action": "log", "food": "egg", "calories": 100},
            {"action": "burn", "exercise": 3},
            {"action": "log", "food": "cake", "calories": 999}
        ]"#,
    )
    .unwrap();

    let output = mealog(&dir, &["replay", "--json", script.to_str().unwrap()], "");
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(snapshot["size"], 1);
    assert_eq!(snapshot["capacity"], 7);
    assert_eq!(snapshot["total_logged"], 400);
    assert_eq!(snapshot["meals"][0]["food_name"], "egg");
}

#[test]
fn test_replay_with_limit() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("day.json");
    fs::write(
        &script,
        r#"[
            {"action": "log", "food": "rice", "calories": 300},
            {"action": "log", "food": "noodles", "calories": 300},
            {"action": "show"}
        ]"#,
    )
    .unwrap();

    let output = mealog(&dir, &["replay", "--limit", "400", script.to_str().unwrap()], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[2] Rejected:"));
    assert!(stdout.contains("exceed the daily limit of 400 kcal"));
    assert!(stdout.contains("--- Current Meal Log (1/7) ---"));
    assert!(stdout.contains("2 action(s) applied, 1 rejected"));
}

#[test]
fn test_replay_missing_script_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let output = mealog(&dir, &["replay", missing.to_str().unwrap()], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read script"));
}

#[test]
fn test_menu_session_over_stdin() {
    let dir = TempDir::new().unwrap();
    let output = mealog(&dir, &["menu"], "g\nrice\n300\negg\n100\ndone\nh\n3\n0\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Final Total Calories Logged: 400 kcal"));
    assert!(stdout.contains("Removed 'rice' from your log."));
    assert!(stdout.contains("Exiting Program."));
}

#[test]
fn test_exercises_json() {
    let dir = TempDir::new().unwrap();
    let output = mealog(&dir, &["exercises", "--json"], "");
    assert!(output.status.success());

    let exercises: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(exercises.as_array().map(|a| a.len()), Some(7));
    assert_eq!(exercises[6]["name"], "Light walk");
}

#[test]
fn test_unwritable_log_dir_does_not_abort() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mealog"))
        .args(["exercises", "--json"])
        .env("MEALOG_LOG_DIR", blocker.join("sub"))
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run mealog");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("logging disabled"));
    let exercises: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(exercises.as_array().map(|a| a.len()), Some(7));
}
