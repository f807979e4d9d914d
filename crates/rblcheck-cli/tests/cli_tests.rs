use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rblcheck(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rblcheck").unwrap();
    cmd.env("RBLCHECK_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RBLCHECK_TIMEOUT")
        .env_remove("RBLCHECK_CONCURRENCY")
        .env_remove("RBLCHECK_NAMESERVERS")
        .arg("--no-color");
    cmd
}

#[test]
fn lists_prints_catalog() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("zen.spamhaus.org"))
        .stdout(predicate::str::contains("bl.spamcop.net"));
}

#[test]
fn lists_as_json() {
    let dir = TempDir::new().unwrap();
    let output = rblcheck(&dir).args(["-o", "json", "lists"]).output().unwrap();
    assert!(output.status.success());

    let zones: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(zones.len(), rblcheck_core::catalog::blacklists().len());
}

#[test]
fn explain_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .args(["--explain", "-o", "csv", "lists"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Known Lists"))
        .stdout(predicate::str::starts_with("zone\n"));
}

#[test]
fn check_rejects_ipv6() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .args(["check", "2001:db8::1", "zen.spamhaus.org"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to lookup IP for RBL"))
        .stderr(predicate::str::contains("invalid IPv4 address: 2001:db8::1"));
}

#[test]
fn check_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .args(["check", "999.1.1.1", "zen.spamhaus.org"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn scan_rejects_bad_address() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .args(["scan", "localhost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid IPv4 address"));
}

#[test]
fn config_round_trip() {
    let dir = TempDir::new().unwrap();

    rblcheck(&dir)
        .args(["config", "set", "zones", "bl.example.test"])
        .assert()
        .success();
    rblcheck(&dir)
        .args(["config", "set", "timeout", "3"])
        .assert()
        .success();

    let output = rblcheck(&dir)
        .args(["-o", "json", "config", "show"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["timeout_secs"], 3);
    assert_eq!(value["zones"][0], "bl.example.test");

    rblcheck(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("From config:"))
        .stdout(predicate::str::contains("bl.example.test"));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .args(["config", "set", "api_key", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_honors_override() {
    let dir = TempDir::new().unwrap();
    rblcheck(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
