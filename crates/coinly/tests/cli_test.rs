//! Integration tests for the `coinly` CLI binary.
//!
//! Argument parsing, help output, completions and config handling run
//! without a server; catalog commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const NO_CONFIG_DIR: &str = "/tmp/coinly-cli-test-nonexistent";

/// Build a [`Command`] for the `coinly` binary with env isolation.
///
/// Clears all `COINLY_*` env vars and points config directories at
/// `config_dir` so tests never touch the user's real configuration.
fn coinly_cmd_in(config_dir: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("coinly");
    cmd.env("HOME", config_dir)
        .env("XDG_CONFIG_HOME", config_dir)
        .env_remove("COINLY_PROFILE")
        .env_remove("COINLY_SERVER")
        .env_remove("COINLY_OUTPUT")
        .env_remove("COINLY_TIMEOUT")
        .env_remove("COINLY_DEFAULT_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

fn coinly_cmd() -> assert_cmd::Command {
    coinly_cmd_in(NO_CONFIG_DIR)
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn coin_json(id: &str, collection: &str) -> serde_json::Value {
    json!({
        "id": id,
        "year": 2006,
        "value": 200,
        "country": "DE",
        "mint": "A",
        "description": "Holstentor",
        "collectionId": collection
    })
}

async fn catalog_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "g1",
            "name": "Germany",
            "collections": [
                {"id": "c1", "name": "2 Euro", "groupId": "g1", "coins": [coin_json("k1", "c1")]},
                {"id": "c2", "name": "1 Euro", "groupId": "g1", "coins": []}
            ]
        }])))
        .mount(&server)
        .await;
    server
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || coinly_cmd().args(args).output().unwrap())
        .await
        .unwrap()
}

fn args(server: &MockServer, rest: &[&str]) -> Vec<String> {
    let mut v = vec!["--server".to_owned(), server.uri()];
    v.extend(rest.iter().map(|s| (*s).to_owned()));
    v
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = coinly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    coinly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("coin catalog")
            .and(predicate::str::contains("groups"))
            .and(predicate::str::contains("collections"))
            .and(predicate::str::contains("coins"))
            .and(predicate::str::contains("tree")),
    );
}

#[test]
fn test_version_flag() {
    coinly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coinly"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    coinly_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    coinly_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = coinly_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = coinly_cmd()
        .args(["--output", "invalid", "groups", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("possible values"));
}

#[test]
fn test_groups_list_without_server_fails() {
    coinly_cmd()
        .args(["groups", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No catalog server configured"));
}

#[test]
fn test_unknown_profile_is_usage_error() {
    coinly_cmd()
        .args(["--profile", "nope", "groups", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Profile 'nope' not found"));
}

#[test]
fn test_unreachable_server_exit_code() {
    coinly_cmd()
        .args(["--server", "http://127.0.0.1:9", "--timeout", "2", "groups", "list"])
        .assert()
        .failure()
        .code(7);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    // Renders the default config when no file exists.
    coinly_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_profile = \"default\""));
}

#[test]
fn test_config_init_then_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path().to_str().unwrap();

    coinly_cmd_in(dir)
        .args(["config", "init", "--name", "home", "--url", "http://nas.local:8080"])
        .assert()
        .success();

    coinly_cmd_in(dir)
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("home *"));

    coinly_cmd_in(dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    coinly_cmd_in(dir.path().to_str().unwrap())
        .args(["config", "set", "color", "always"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

// ── Catalog commands (wiremock) ─────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_groups_list_plain() {
    let server = catalog_server().await;

    let output = run(args(&server, &["-o", "plain", "groups", "list"])).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "g1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_collections_list_json_filtered_by_group() {
    let server = catalog_server().await;

    let output = run(args(
        &server,
        &["-o", "json-compact", "collections", "list", "--group", "g1"],
    ))
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["c1", "c2"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tree_renders_hierarchy() {
    let server = catalog_server().await;

    let output = run(args(&server, &["tree"])).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Germany (g1)"), "{stdout}");
    assert!(stdout.contains("2006 DE 2.00 A \"Holstentor\" (k1)"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_coin_move_refreshes_both_collections() {
    let server = catalog_server().await;
    Mock::given(method("PATCH"))
        .and(path("/api/coins/k1"))
        .and(body_json(json!({"collectionId": "c2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(coin_json("k1", "c2")))
        .expect(1)
        .mount(&server)
        .await;
    for (id, coins) in [("c1", json!([])), ("c2", json!([coin_json("k1", "c2")]))] {
        Mock::given(method("GET"))
            .and(path(format!("/api/collections/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id, "name": id, "groupId": "g1", "coins": coins
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let output = run(args(&server, &["coins", "update", "k1", "--collection", "c2"])).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Coin updated"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_rejected_create_reports_slot_message() {
    let server = catalog_server().await;
    Mock::given(method("POST"))
        .and(path("/api/groups"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "Group already exists"})),
        )
        .mount(&server)
        .await;

    let output = run(args(&server, &["groups", "create", "Germany"])).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to create group: Validation failed: Group already exists"),
        "{stderr}"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_coin_get_unknown_is_not_found() {
    let server = catalog_server().await;
    Mock::given(method("GET"))
        .and(path("/api/coins/k9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Coin not found"})))
        .mount(&server)
        .await;

    let output = run(args(&server, &["coins", "get", "k9"])).await;

    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("coins list"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_coin_delete_with_yes() {
    let server = catalog_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/coins/k1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/collections/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1", "name": "2 Euro", "groupId": "g1", "coins": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(args(&server, &["--yes", "coins", "delete", "k1"])).await;

    assert!(output.status.success(), "{}", combined_output(&output));
}
