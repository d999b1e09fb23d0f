use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn fight_prints_transcript() {
    Command::cargo_bin("fight-cli")
        .unwrap()
        .args(["fight", "--seed", "42", "--max-ticks", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Billy**").and(predicate::str::contains("**Bob**")));
}

#[test]
fn fight_json_has_logs_and_snapshots() {
    let out = Command::cargo_bin("fight-cli")
        .unwrap()
        .args(["fight", "--seed", "7", "--max-ticks", "300", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(value["ticks"].as_u64().unwrap() <= 301);
    let logs = value["logs"].as_array().unwrap();
    assert!(!logs.is_empty());
    assert!(logs[0]["ctx"]["fighters"].as_array().unwrap().len() == 2);
}

#[test]
fn roster_lists_builtins() {
    Command::cargo_bin("fight-cli")
        .unwrap()
        .arg("roster")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Billy\"").and(predicate::str::contains("\"Bob\"")));
}

#[test]
fn missing_config_fails() {
    Command::cargo_bin("fight-cli")
        .unwrap()
        .args(["fight", "--config", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn simulate_vs_reports_rates() {
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--trials", "20", "--max-ticks", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trials:             20"));
}

fn bom_config(tag: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("fight-cli-{}-{}.json", tag, std::process::id()));
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(br#"{"fighters":[{"builtin":"billy"},{"builtin":"bob"}]}"#);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn both_binaries_accept_a_bom_prefixed_config() {
    let path = bom_config("fight");
    Command::cargo_bin("fight-cli")
        .unwrap()
        .args(["fight", "--seed", "3", "--max-ticks", "500", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Billy**"));

    let sim = bom_config("simulate");
    Command::cargo_bin("simulate-vs")
        .unwrap()
        .args(["--trials", "5", "--max-ticks", "500", "--config"])
        .arg(&sim)
        .assert()
        .success()
        .stdout(predicate::str::contains("trials:             5"));

    std::fs::remove_file(path).unwrap();
    std::fs::remove_file(sim).unwrap();
}
