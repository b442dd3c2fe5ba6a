//! Integration tests for the pingen binary.
//!
//! These tests run the compiled binary in temp directories via assert_cmd
//! and assert_fs, covering the generate/status/reset contracts and the
//! exit-code boundary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn pingen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pingen").expect("binary built");
    cmd.current_dir(dir.path());
    cmd
}

/// Parse comma-separated generate output into individual PIN strings.
fn parse_pins(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .trim_end()
        .split(", ")
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn generate_prints_pins_and_writes_store() {
    let dir = TempDir::new().expect("temp dir");

    let output = pingen(&dir)
        .args(["generate", "--count", "3", "--store", "used.json"])
        .assert()
        .success()
        .get_output()
        .clone();

    let pins = parse_pins(&output.stdout);
    assert_eq!(pins.len(), 3);
    for pin in &pins {
        assert_eq!(pin.len(), 4);
        assert!(pin.bytes().all(|b| b.is_ascii_digit()), "bad pin: {}", pin);
        assert!(!["1111", "1234", "9999"].contains(&pin.as_str()));
    }
    assert_eq!(
        pins.iter().collect::<std::collections::HashSet<_>>().len(),
        3,
        "pins must be distinct"
    );

    // The store holds exactly those pins in generation order
    let content =
        std::fs::read_to_string(dir.path().join("used.json")).expect("store file exists");
    let stored: Vec<String> = serde_json::from_str(&content).expect("store is a json list");
    assert_eq!(stored, pins);
}

#[test]
fn generate_appends_across_runs_without_repeats() {
    let dir = TempDir::new().expect("temp dir");

    let first = pingen(&dir)
        .args(["generate", "--count", "4", "--store", "used.json"])
        .assert()
        .success()
        .get_output()
        .clone();
    let second = pingen(&dir)
        .args(["generate", "--count", "4", "--store", "used.json"])
        .assert()
        .success()
        .get_output()
        .clone();

    let mut all = parse_pins(&first.stdout);
    all.extend(parse_pins(&second.stdout));
    assert_eq!(
        all.iter().collect::<std::collections::HashSet<_>>().len(),
        8,
        "a pin repeated across process restarts"
    );
}

#[test]
fn generate_honors_barred_store_file() {
    let dir = TempDir::new().expect("temp dir");

    // Bar everything except 0007; the only possible output is 0007.
    let barred: Vec<String> = (0..=9999u16)
        .filter(|v| *v != 7)
        .map(|v| format!("{v:04}"))
        .collect();
    dir.child("barred.json")
        .write_str(&serde_json::to_string(&barred).expect("serialize"))
        .expect("write barred store");

    pingen(&dir)
        .args([
            "generate",
            "--count",
            "1",
            "--store",
            "used.json",
            "--barred-store",
            "barred.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0007"));
}

#[test]
fn corrupt_store_fails_with_nonzero_exit() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("used.json")
        .write_str("not a json list")
        .expect("write corrupt store");

    pingen(&dir)
        .args(["generate", "--count", "1", "--store", "used.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn corrupt_barred_store_fails_with_nonzero_exit() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("barred.json")
        .write_str("[1111]")
        .expect("write wrong-typed barred store");

    pingen(&dir)
        .args([
            "generate",
            "--count",
            "1",
            "--store",
            "used.json",
            "--barred-store",
            "barred.json",
        ])
        .assert()
        .failure();
}

#[test]
fn status_reports_fresh_and_used_stores() {
    let dir = TempDir::new().expect("temp dir");

    pingen(&dir)
        .args(["status", "--store", "used.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("absent"))
        .stdout(predicate::str::contains("issued: 0"));

    pingen(&dir)
        .args(["generate", "--count", "2", "--store", "used.json"])
        .assert()
        .success();

    pingen(&dir)
        .args(["status", "--store", "used.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("present"))
        .stdout(predicate::str::contains("issued: 2"))
        .stdout(predicate::str::contains("barred: 3"));
}

#[test]
fn reset_clears_store_and_is_idempotent() {
    let dir = TempDir::new().expect("temp dir");

    pingen(&dir)
        .args(["generate", "--count", "2", "--store", "used.json"])
        .assert()
        .success();
    assert!(dir.path().join("used.json").exists());

    pingen(&dir)
        .args(["reset", "--store", "used.json"])
        .assert()
        .success();
    assert!(!dir.path().join("used.json").exists());

    // Resetting an absent store still succeeds
    pingen(&dir)
        .args(["reset", "--store", "used.json"])
        .assert()
        .success();
}

#[test]
fn config_file_supplies_paths_and_count() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("pingen.toml")
        .write_str("count = 2\n\n[stores]\nused = \"custom.json\"\n")
        .expect("write config");

    pingen(&dir).arg("generate").assert().success();

    let content =
        std::fs::read_to_string(dir.path().join("custom.json")).expect("config path honored");
    let stored: Vec<String> = serde_json::from_str(&content).expect("store is a json list");
    assert_eq!(stored.len(), 2);
}

#[test]
fn cli_flag_beats_config_file() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("pingen.toml")
        .write_str("count = 5\n\n[stores]\nused = \"custom.json\"\n")
        .expect("write config");

    pingen(&dir)
        .args(["generate", "--count", "1", "--store", "flag.json"])
        .assert()
        .success();

    assert!(!dir.path().join("custom.json").exists());
    let content = std::fs::read_to_string(dir.path().join("flag.json")).expect("flag path honored");
    let stored: Vec<String> = serde_json::from_str(&content).expect("store is a json list");
    assert_eq!(stored.len(), 1);
}

#[test]
fn malformed_config_fails_with_nonzero_exit() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("pingen.toml")
        .write_str("coutn = 5\n")
        .expect("write bad config");

    pingen(&dir)
        .args(["generate", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn completion_generates_a_script() {
    let dir = TempDir::new().expect("temp dir");

    pingen(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pingen"));
}
