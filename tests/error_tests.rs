//! Error scenario and config round-trip tests against the binary

mod common;

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::MockServer;

use common::*;

/// Binary with a config file inside `dir` and no `CASE_*` overrides
fn bin(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("case-transcriber").unwrap();
    cmd.env("CASE_TRANSCRIBER_CONFIG", dir.join("config.toml"));
    for var in [
        "CASE_GRAPH_URL",
        "CASE_FILE_STORE_URL",
        "CASE_TRANSCRIPTION_URL",
        "CASE_SERVER_PORT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["config", "set", "api_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_url() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["config", "set", "graph_url", "graph.local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("graph_url"));
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn config_set_invalid_boolean() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["config", "set", "logging.json", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true").and(predicate::str::contains("false")));
}

#[test]
fn config_list_with_no_file() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph_url"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["config", "set", "server.port", "9090"])
        .assert()
        .success();

    bin(dir.path())
        .args(["config", "get", "server.port"])
        .assert()
        .success()
        .stdout("9090\n");
}

#[test]
fn config_init_twice() {
    let dir = TempDir::new().unwrap();
    bin(dir.path()).args(["config", "init"]).assert().success();
    bin(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    bin(dir.path())
        .args(["config", "get", "transcription_timeout_secs"])
        .assert()
        .success()
        .stdout("150\n");
}

#[test]
fn malformed_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "server = 12").unwrap();

    bin(dir.path())
        .args(["run", "--doctor-id", "D1", "--case-id", "C1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn run_without_service_urls() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .args(["run", "--doctor-id", "D1", "--case-id", "C1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CASE_GRAPH_URL"));
}

#[test]
fn invalid_port_env() {
    let dir = TempDir::new().unwrap();
    bin(dir.path())
        .env("CASE_SERVER_PORT", "eighty")
        .args(["serve"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CASE_SERVER_PORT"));
}

/// `run` against mock collaborators, URLs coming from the environment
fn run_case(server_uri: String, dir: &Path, doctor_id: &str) -> assert_cmd::assert::Assert {
    bin(dir)
        .env("CASE_GRAPH_URL", format!("{}{}", server_uri, GRAPH_PATH))
        .env("CASE_FILE_STORE_URL", format!("{}{}", server_uri, FILE_PATH))
        .env("CASE_TRANSCRIPTION_URL", format!("{}{}", server_uri, ASR_PATH))
        .args(["run", "--doctor-id", doctor_id, "--case-id", "C1"])
        .assert()
}

#[tokio::test(flavor = "multi_thread")]
async fn run_prints_success_envelope() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;
    let dir = TempDir::new().unwrap();

    let uri = server.uri();
    let path = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        run_case(uri, &path, "D1")
            .success()
            .stdout(predicate::str::contains(r#""code":200"#))
            .stdout(predicate::str::contains("Operation succeeded"));
    })
    .await
    .unwrap();

    assert_eq!(received(&server).await.len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn run_prints_failure_envelope() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let uri = server.uri();
    let path = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        run_case(uri, &path, " ")
            .code(1)
            .stdout(predicate::str::contains(r#""code":500"#))
            .stdout(predicate::str::contains("missing required identifier"));
    })
    .await
    .unwrap();

    assert!(received(&server).await.is_empty());
}
