//! End-to-end runs of the `seqdemo` runner with config files on disk.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn seqdemo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqdemo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_run_single_demo() {
    let output = seqdemo(&["run", "equal-range"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2 5\n");
}

#[test]
fn test_list_names_every_demo() {
    let output = seqdemo(&["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["count-matching", "shuffle", "heap-validity-check"] {
        assert!(text.contains(name), "missing {} in:\n{}", name, text);
    }
}

#[test]
fn test_config_overrides_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demos.toml");
    fs::write(
        &path,
        r#"
[count-matching]
sequence = [10, 20, 30, 40]
predicate = { kind = "greater-than", value = 15 }
"#,
    )
    .unwrap();

    let output = seqdemo(&["run", "count-matching", "--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn test_seeded_shuffle_is_repeatable() {
    let a = seqdemo(&["run", "shuffle", "--seed", "17"]);
    let b = seqdemo(&["run", "shuffle", "--seed", "17"]);
    assert!(a.status.success());
    assert_eq!(stdout(&a), stdout(&b));
}

#[test]
fn test_json_format() {
    let output = seqdemo(&["run", "min-and-max", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["demo"], "min-and-max");
    assert_eq!(value["outcome"]["values"], serde_json::json!([1, 7]));
}

#[test]
fn test_precondition_violation_fails_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unsorted.toml");
    fs::write(&path, "[equal-range]\nsequence = [5, 1, 3]\n").unwrap();

    let output = seqdemo(&["run", "equal-range", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("not sorted"), "stderr was: {}", err);
}

#[test]
fn test_all_reports_failures_but_runs_every_demo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[generate-fill]\ncount = 8\nsequence = [0, 0]\n").unwrap();

    let output = seqdemo(&["all", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("heap-validity-check"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 11 demos failed"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let output = seqdemo(&["all", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read config file"));
}

#[test]
fn test_unknown_demo_suggestion() {
    let output = seqdemo(&["run", "mismach"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("did you mean 'mismatch'"));
}
