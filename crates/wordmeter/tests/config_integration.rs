//! Configuration integration tests.
//!
//! Each test builds a throwaway directory tree, runs the binary from it and
//! reads the effective settings back through `info --json`, or checks that
//! `stats` actually honors them.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = cmd()
        .arg("-C")
        .arg(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

fn effective_config(dir: &Path) -> Value {
    run_json(dir, &["info"])["config"].clone()
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn defaults_without_any_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = effective_config(tmp.path());

    assert_eq!(config["log_level"], "info");
    assert_eq!(config["words_per_minute"], 200);
    assert_eq!(config["density_top"], 5);
    assert_eq!(config["exclude_spaces"], false);
    assert!(config["config_file"].is_null());
    assert!(config["char_limit"].is_null());
}

#[test]
fn dotfile_is_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "words_per_minute = 250\n").unwrap();

    let config = effective_config(tmp.path());
    assert_eq!(config["words_per_minute"], 250);
    assert!(
        config["config_file"]
            .as_str()
            .unwrap()
            .ends_with(".wordmeter.toml")
    );
}

#[test]
fn parent_directory_config_is_discovered() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("notes").join("drafts");
    fs::create_dir_all(&nested).unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "density_top = 8\n").unwrap();

    assert_eq!(effective_config(&nested)["density_top"], 8);
}

#[test]
fn plain_name_wins_over_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "density_top = 3\n").unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "density_top = 9\n").unwrap();

    assert_eq!(effective_config(tmp.path())["density_top"], 9);
}

#[test]
fn nearer_config_wins_over_parent() {
    let tmp = TempDir::new().unwrap();
    let child = tmp.path().join("chapter");
    fs::create_dir_all(&child).unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "words_per_minute = 100\n").unwrap();
    fs::write(child.join(".wordmeter.toml"), "words_per_minute = 300\n").unwrap();

    assert_eq!(effective_config(&child)["words_per_minute"], 300);
}

#[test]
fn git_directory_bounds_the_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "words_per_minute = 42\n").unwrap();

    let config = effective_config(&src);
    assert_eq!(config["words_per_minute"], 200);
    assert!(config["config_file"].is_null());
}

#[test]
fn config_next_to_git_directory_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".wordmeter.toml"), "log_level = \"debug\"\n").unwrap();

    assert_eq!(effective_config(&src)["log_level"], "debug");
}

// =============================================================================
// Formats
// =============================================================================

#[test]
fn yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordmeter.yaml"),
        "exclude_spaces: true\nchar_limit: 280\n",
    )
    .unwrap();

    let config = effective_config(tmp.path());
    assert_eq!(config["exclude_spaces"], true);
    assert_eq!(config["char_limit"], 280);
}

#[test]
fn json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordmeter.json"),
        r#"{"alphabet": "abcñ"}"#,
    )
    .unwrap();

    assert_eq!(effective_config(tmp.path())["alphabet"], "abcñ");
}

#[test]
fn later_extension_overrides_earlier() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "density_top = 2\n").unwrap();
    fs::write(tmp.path().join(".wordmeter.yml"), "density_top: 7\n").unwrap();

    assert_eq!(effective_config(tmp.path())["density_top"], 7);
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "words_per_minute = 150\n").unwrap();
    let explicit = tmp.path().join("fast-reader.toml");
    fs::write(&explicit, "words_per_minute = 400\n").unwrap();

    let output = cmd()
        .arg("-C")
        .arg(tmp.path())
        .arg("--config")
        .arg(&explicit)
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["words_per_minute"], 400);
    assert!(
        json["config"]["config_file"]
            .as_str()
            .unwrap()
            .ends_with("fast-reader.toml")
    );
}

#[test]
fn environment_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "words_per_minute = 150\n").unwrap();

    let output = cmd()
        .env("WORDMETER_WORDS_PER_MINUTE", "320")
        .arg("-C")
        .arg(tmp.path())
        .args(["info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["words_per_minute"], 320);
}

// =============================================================================
// Settings Reach the Analysis
// =============================================================================

#[test]
fn configured_speed_drives_reading_time() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "words_per_minute = 1\n").unwrap();
    fs::write(tmp.path().join("note.txt"), "three little words").unwrap();

    let json = run_json(tmp.path(), &["stats", "note.txt"]);
    assert_eq!(json["report"]["reading_time"], "3 minutes");
}

#[test]
fn configured_exclude_spaces_applies_to_stats() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "exclude_spaces = true\n").unwrap();
    fs::write(tmp.path().join("note.txt"), "a b c").unwrap();

    let json = run_json(tmp.path(), &["stats", "note.txt"]);
    assert_eq!(json["report"]["character_count"], 3);
}

#[test]
fn configured_alphabet_limits_density() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "alphabet = \"ab\"\n").unwrap();
    fs::write(tmp.path().join("note.txt"), "abc abc").unwrap();

    let json = run_json(tmp.path(), &["density", "note.txt"]);
    let letters: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["letter"].as_str().unwrap())
        .collect();
    assert_eq!(letters, ["a", "b"]);
}

#[test]
fn configured_top_is_overridden_by_flag() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "density_top = 1\n").unwrap();
    fs::write(tmp.path().join("note.txt"), "abcdef").unwrap();

    let configured = run_json(tmp.path(), &["density", "note.txt"]);
    assert_eq!(configured.as_array().unwrap().len(), 1);

    let flagged = run_json(tmp.path(), &["density", "note.txt", "--top", "4"]);
    assert_eq!(flagged.as_array().unwrap().len(), 4);
}

#[test]
fn configured_char_limit_leaves_files_whole() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "char_limit = 3\n").unwrap();
    fs::write(tmp.path().join("in.txt"), "aaabbbbbbbbbb").unwrap();

    let density = run_json(tmp.path(), &["density", "in.txt", "--all"]);
    let rows = density.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["letter"], "b");
    assert_eq!(rows[0]["count"], 10);
    assert_eq!(rows[1]["count"], 3);

    let stats = run_json(tmp.path(), &["stats", "in.txt"]);
    assert_eq!(stats["report"]["character_count"], 13);
    assert!(stats["char_limit"].is_null());
}

#[test]
fn configured_char_limit_applies_to_live() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "char_limit = 3\n").unwrap();

    let output = cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["live", "--json"])
        .write_stdin("aaabbbbbbbbbb\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["report"]["character_count"], 3);
    assert_eq!(snapshot["char_limit"], 3);
}

#[test]
fn disabled_input_limit_accepts_large_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("wordmeter.toml"),
        "max_input_bytes = 4\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(tmp.path().join("note.txt"), "longer than four bytes").unwrap();

    let json = run_json(tmp.path(), &["stats", "note.txt"]);
    assert_eq!(json["report"]["word_count"], 4);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn zero_words_per_minute_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "words_per_minute = 0\n").unwrap();

    cmd()
        .arg("-C")
        .arg(tmp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn zero_char_limit_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("wordmeter.toml"), "char_limit = 0\n").unwrap();

    cmd()
        .arg("-C")
        .arg(tmp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn malformed_toml_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.toml"), "words_per_minute = [[[").unwrap();

    cmd()
        .arg("-C")
        .arg(tmp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn malformed_json_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".wordmeter.json"), "{density_top: }").unwrap();

    cmd().arg("-C").arg(tmp.path()).arg("info").assert().failure();
}

#[test]
fn unknown_keys_are_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".wordmeter.toml"),
        "density_top = 6\ntheme = \"dark\"\n",
    )
    .unwrap();

    assert_eq!(effective_config(tmp.path())["density_top"], 6);
}
