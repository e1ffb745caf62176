use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde::Deserialize;
use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[derive(Deserialize)]
struct SummaryOut {
    games: u64,
    seed: u64,
    self_wins: u64,
    opponent_wins: u64,
    draws: u64,
}

fn run_json(args: &[&str]) -> SummaryOut {
    let out = Command::cargo_bin("simulate")
        .expect("binary exists")
        .args(args)
        .arg("--json")
        .output()
        .expect("run simulate");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).expect("summary JSON")
}

#[test]
fn summary_counts_every_game() {
    let s = run_json(&["--games", "24", "--seed", "5", "--rules", "elemental,same,plus,combo"]);
    assert_eq!(s.games, 24);
    assert_eq!(s.seed, 5);
    assert_eq!(s.self_wins + s.opponent_wins + s.draws, 24);
}

#[test]
fn same_seed_same_summary() {
    let args = ["--games", "16", "--seed", "99", "--own", "tactical", "--opponent", "random"];
    let a = run_json(&args);
    let b = run_json(&args);
    assert_eq!(
        (a.self_wins, a.opponent_wins, a.draws),
        (b.self_wins, b.opponent_wins, b.draws)
    );
}

#[test]
fn text_summary_line() {
    Command::cargo_bin("simulate")
        .unwrap()
        .args(["--games", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[simulate] games=3 "));
}

#[test]
fn config_file_is_honored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("match.toml");
    fs::write(&path, "seed = 12\nown = \"random\"\nopponent = \"random\"\n").unwrap();

    let s = run_json(&["--config", path.to_str().unwrap(), "--games", "4"]);
    assert_eq!(s.seed, 12);
    assert_eq!(s.games, 4);
}

#[test]
fn bad_cards_path_fails() {
    Command::cargo_bin("simulate")
        .unwrap()
        .args(["--games", "1", "--cards", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cards load error: failed to read cards file"));
}
