//! Integration tests for CLI commands.

use std::process::Command;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_destiny"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_matrix_table_output() {
    let (success, stdout, _) = run_cli(&["matrix", "1990-05-15"]);
    assert!(success);
    assert!(stdout.contains("NODE"));
    assert!(stdout.contains("ancestral_top"));
    assert!(stdout.contains("karmic_tail"));
    assert!(stdout.contains("money:  5 -> 11 -> 6"));
    assert!(stdout.contains("love:   19 -> 7 -> 6"));
    assert!(stdout.contains("karmic: 12 -> 18 -> 6"));
}

#[test]
fn test_matrix_json_output() {
    let (success, stdout, _) = run_cli(&["matrix", "1990-05-15", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["nodes"]["ancestral_top"]["value"], 15);
    assert_eq!(parsed["nodes"]["ancestral_left"]["value"], 12);
    assert_eq!(parsed["nodes"]["soul_center"]["value"], 6);
    assert_eq!(parsed["nodes"]["money_line"]["label"], "Money Channel");
    assert_eq!(parsed["channels"]["money"], serde_json::json!([5, 11, 6]));
}

#[test]
fn test_matrix_canonical_output_is_single_line() {
    let (success, stdout, _) = run_cli(&["matrix", "1990-05-15", "--canonical"]);
    assert!(success);
    let line = stdout.trim_end();
    assert!(!line.contains('\n'));
    assert!(line.starts_with(r#"{"channels":{"karmic":[12,18,6]"#));
    serde_json::from_str::<serde_json::Value>(line).expect("Invalid JSON");
}

#[test]
fn test_matrix_fingerprint_is_stable() {
    let (success, first, _) = run_cli(&["matrix", "1990-05-15", "--fingerprint"]);
    assert!(success);
    let (_, second, _) = run_cli(&["matrix", "1990-05-15", "--fingerprint"]);
    assert_eq!(first, second);
    assert!(first.starts_with("sha-256:"));
}

#[test]
fn test_matrix_rejects_impossible_date() {
    let (success, _, stderr) = run_cli(&["matrix", "2023-02-30"]);
    assert!(!success);
    assert!(stderr.contains("not a valid date"));
}

#[test]
fn test_matrix_rejects_future_date() {
    let (success, _, stderr) = run_cli(&["matrix", "9999-01-01"]);
    assert!(!success);
    assert!(stderr.contains("in the future"));
}

#[test]
fn test_matrix_rejects_early_year() {
    let (success, _, stderr) = run_cli(&["matrix", "1850-06-01"]);
    assert!(!success);
    assert!(stderr.contains("before 1900"));
}

#[test]
fn test_channels_json() {
    let (success, stdout, _) = run_cli(&["channels", "1990-02-01", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["karmic"][0], 22);
    assert_eq!(parsed["karmic"][2], parsed["money"][2]);
}

#[test]
fn test_describe_with_category() {
    let (success, stdout, _) = run_cli(&["describe", "22", "--category", "love"]);
    assert!(success);
    assert!(stdout.starts_with("The Fool (22)"));
}

#[test]
fn test_describe_falls_back_to_first_entry() {
    let (success, stdout, _) = run_cli(&["describe", "40"]);
    assert!(success);
    assert!(stdout.starts_with("The Magician (1)"));
}

#[test]
fn test_describe_rejects_unknown_category() {
    let (success, _, stderr) = run_cli(&["describe", "3", "--category", "wealth"]);
    assert!(!success);
    assert!(stderr.contains("Invalid category"));
}

#[test]
fn test_reduce_command() {
    let (success, stdout, _) = run_cli(&["reduce", "1990"]);
    assert!(success);
    assert_eq!(stdout.trim(), "19");

    let (_, stdout, _) = run_cli(&["reduce", "22"]);
    assert_eq!(stdout.trim(), "22");
}

#[test]
fn test_reduce_accepts_values_beyond_u32() {
    let (success, stdout, _) = run_cli(&["reduce", "5000000000"]);
    assert!(success);
    assert_eq!(stdout.trim(), "5");

    let (success, stdout, _) = run_cli(&["reduce", "18446744073709551615"]);
    assert!(success);
    assert_eq!(stdout.trim(), "15");
}
