//! Basic CLI E2E tests.
//!
//! Tests run the built `kanadeck` binary against a throwaway data directory
//! and verify outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli_with_input(data_dir: &Path, args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kanadeck"))
        .args(args)
        .env("KANADECK_DATA_DIR", data_dir)
        .env_remove("KANADECK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    let output = child.wait_with_output().expect("Failed to wait for CLI");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_with_input(data_dir, args, "")
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    stdout
}

fn progress(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let stdout = run_cli_success(data_dir, args);
    serde_json::from_str(&stdout).expect("progress prints JSON")
}

fn write_day(dir: &Path, day: u32, body: &str) {
    let day_dir = dir.join(format!("day{day}"));
    std::fs::create_dir_all(&day_dir).unwrap();
    std::fs::write(day_dir.join(format!("data{day}.json")), body).unwrap();
}

#[test]
fn test_letters_show() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["letters", "show"]);
    assert!(stdout.contains("[hiragana] tier 1 (1/46)"));
    assert!(stdout.contains('아'));
    assert!(!stdout.contains('あ'));
}

#[test]
fn test_letters_hint() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["letters", "hint"]);
    assert!(stdout.starts_with("아기: "));
    assert!(!stdout.contains('あ'));
}

#[test]
fn test_letters_correct_persists() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["letters", "correct"]);
    assert!(stdout.contains("moved to tier 2"));

    let json = progress(dir.path(), &["letters", "progress"]);
    assert_eq!(json["tiers"]["1"], 45);
    assert_eq!(json["tiers"]["2"], 1);
}

#[test]
fn test_letters_tier_selection_is_remembered() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["letters", "correct"]);
    let stdout = run_cli_success(dir.path(), &["letters", "tier", "2"]);
    assert!(stdout.contains("tier 2 (1/1)"));

    let json = progress(dir.path(), &["letters", "progress"]);
    assert_eq!(json["selectedTier"], 2);
}

#[test]
fn test_letters_empty_tier() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["letters", "tier", "5"]);
    assert!(stdout.contains("tier 5 is empty"));
    let stdout = run_cli_success(dir.path(), &["letters", "wrong"]);
    assert!(stdout.contains("tier 5 is empty"));
}

#[test]
fn test_letters_invalid_tier() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["letters", "tier", "6"]);
    assert_ne!(code, 0);
}

#[test]
fn test_letters_kana_switch() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["letters", "kana", "katakana"]);
    assert!(stdout.contains("[katakana]"));
    let stdout = run_cli_success(dir.path(), &["letters", "show"]);
    assert!(stdout.contains("[katakana]"));
    let stdout = run_cli_success(dir.path(), &["letters", "correct"]);
    assert!(stdout.contains("ア (a)"));
}

#[test]
fn test_letters_reset_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["letters", "correct"]);

    let (stdout, _, code) = run_cli_with_input(dir.path(), &["letters", "reset"], "n\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("reset cancelled"));
    assert_eq!(progress(dir.path(), &["letters", "progress"])["tiers"]["2"], 1);

    let (stdout, _, _) = run_cli_with_input(dir.path(), &["letters", "reset"], "y\n");
    assert!(stdout.contains("progress reset"));
    assert_eq!(progress(dir.path(), &["letters", "progress"])["tiers"]["1"], 46);
}

#[test]
fn test_letters_reset_yes_flag() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["letters", "correct"]);
    let stdout = run_cli_success(dir.path(), &["letters", "reset", "--yes"]);
    assert!(stdout.contains("progress reset"));
    assert_eq!(progress(dir.path(), &["letters", "progress"])["tiers"]["2"], 0);
}

#[test]
fn test_sentences_from_directory() {
    let dir = TempDir::new().unwrap();
    let content = TempDir::new().unwrap();
    write_day(
        content.path(),
        3,
        r#"[{"korean":"안녕하세요","japanese":"こんにちは"},{"korean":"네","japanese":"はい"},{"korean":"아니요","japanese":"いいえ"}]"#,
    );
    let source = content.path().to_str().unwrap();
    run_cli_success(dir.path(), &["config", "set", "content.source", source]);

    let stdout = run_cli_success(dir.path(), &["sentences", "--day", "3", "show"]);
    assert!(stdout.contains("[day 3] tier 1 (1/3)"));
    assert!(stdout.contains("안녕하세요"));

    let stdout = run_cli_success(dir.path(), &["sentences", "--day", "3", "correct"]);
    assert!(stdout.contains("こんにちは"));
    let json = progress(dir.path(), &["sentences", "--day", "3", "progress"]);
    assert_eq!(json["tiers"]["2"], 1);
    assert_eq!(json["total"], 3);
}

#[test]
fn test_sentences_missing_day_uses_sample() {
    let dir = TempDir::new().unwrap();
    let content = TempDir::new().unwrap();
    let source = content.path().to_str().unwrap();
    run_cli_success(dir.path(), &["config", "set", "content.source", source]);

    let (stdout, stderr, code) = run_cli(dir.path(), &["sentences", "--day", "7", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("(sample)"));
    assert!(stderr.contains("built-in sample"));
}

#[test]
fn test_sentences_day_out_of_range() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["sentences", "--day", "41", "show"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_study_letters_session() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) =
        run_cli_with_input(dir.path(), &["study", "letters"], "n\nh\nf\nc\nq\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("(2/46)"));
    assert!(stdout.contains("> い (i)\n"));

    let json = progress(dir.path(), &["letters", "progress"]);
    assert_eq!(json["tiers"]["2"], 1);
}

#[test]
fn test_config_get_set() {
    let dir = TempDir::new().unwrap();
    assert_eq!(run_cli_success(dir.path(), &["config", "get", "content.days"]).trim(), "40");
    run_cli_success(dir.path(), &["config", "set", "content.days", "12"]);
    assert_eq!(run_cli_success(dir.path(), &["config", "get", "content.days"]).trim(), "12");

    let (_, _, code) = run_cli(dir.path(), &["sentences", "--day", "13", "show"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_unknown_key() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "study.nope", "1"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_list_and_reset() {
    let dir = TempDir::new().unwrap();
    run_cli_success(dir.path(), &["config", "set", "study.default_kana", "katakana"]);
    let json: serde_json::Value =
        serde_json::from_str(&run_cli_success(dir.path(), &["config", "list"])).unwrap();
    assert_eq!(json["study"]["default_kana"], "katakana");

    let stdout = run_cli_success(dir.path(), &["config", "reset"]);
    assert!(stdout.contains("config.toml"));
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "study.default_kana"]).trim(),
        "hiragana"
    );
}

#[test]
fn test_config_path_and_validation() {
    let dir = TempDir::new().unwrap();
    let path = run_cli_success(dir.path(), &["config", "path"]);
    assert_eq!(path.trim(), dir.path().join("config.toml").display().to_string());

    let (_, stderr, code) = run_cli(
        dir.path(),
        &["config", "set", "content.path_template", "day.json"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("{N}"));
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "content.source", "https://"]);
    assert_eq!(code, 1);
    assert_eq!(
        run_cli_success(dir.path(), &["config", "get", "content.path_template"]).trim(),
        "day{N}/data{N}.json"
    );
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let stdout = run_cli_success(dir.path(), &["completions", "bash"]);
    assert!(stdout.contains("kanadeck"));
}
