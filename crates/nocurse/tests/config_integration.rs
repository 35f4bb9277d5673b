//! Configuration integration tests.
//!
//! Each test writes config files into a temp tree, runs the binary there and
//! reads the effective settings back from `info --json`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory with extra arguments and parse the output.
fn info_json_with(dir: &Path, extra: &[&str]) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap()])
        .args(extra)
        .args(["info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

fn info_json(dir: &Path) -> Value {
    info_json_with(dir, &[])
}

fn config_file(json: &Value) -> &str {
    json["config"]["config_file"]
        .as_str()
        .expect("a config file should be reported")
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn source_defaults_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());
    let source = &json["config"]["source"];

    assert!(json["config"]["config_file"].is_null());
    assert_eq!(source["timeout_secs"], 10);
    assert_eq!(source["retry_attempts"], 3);
    assert_eq!(source["retry_delay_ms"], 2000);
    assert_eq!(source["html"], true);
    assert_eq!(source["api"], true);
    assert!(
        json["config"]["cache_path"]
            .as_str()
            .unwrap()
            .ends_with("bad_words_cache.json")
    );
}

#[test]
fn parent_directory_config_sets_page_limit() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("bot").join("handlers");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        tmp.path().join("nocurse.yaml"),
        "source:\n  page_limit: 20\n",
    )
    .unwrap();

    let json = info_json(&nested);

    assert_eq!(json["config"]["source"]["page_limit"], 20);
    assert!(config_file(&json).ends_with("nocurse.yaml"));
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn closer_project_file_overrides_timeout() {
    let tmp = TempDir::new().unwrap();
    let child = tmp.path().join("service");
    fs::create_dir(&child).unwrap();

    fs::write(
        tmp.path().join("nocurse.toml"),
        "[source]\ntimeout_secs = 40\nretry_attempts = 6\n",
    )
    .unwrap();
    fs::write(child.join(".nocurse.toml"), "[source]\ntimeout_secs = 5\n").unwrap();

    let json = info_json(&child);
    let source = &json["config"]["source"];

    assert_eq!(source["timeout_secs"], 5);
    assert_eq!(
        source["retry_attempts"], 3,
        "only the closest directory's files are merged"
    );
}

#[test]
fn yaml_after_toml_merges_source_fields() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("nocurse.toml"),
        "[source]\ntimeout_secs = 7\napi = false\nretry_attempts = 4\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("nocurse.yaml"),
        "source:\n  retry_attempts: 1\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    let source = &json["config"]["source"];

    assert_eq!(source["timeout_secs"], 7);
    assert_eq!(source["api"], false);
    assert_eq!(source["retry_attempts"], 1);
    assert!(config_file(&json).ends_with("nocurse.yaml"));
}

#[test]
fn regular_file_overrides_dotfile_fields() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".nocurse.json"),
        r#"{"source": {"html": false, "retry_delay_ms": 50}}"#,
    )
    .unwrap();
    fs::write(tmp.path().join("nocurse.toml"), "[source]\nhtml = true\n").unwrap();

    let json = info_json(tmp.path());
    let source = &json["config"]["source"];

    assert_eq!(source["html"], true);
    assert_eq!(source["retry_delay_ms"], 50);
}

#[test]
fn explicit_config_overrides_cache_path() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    fs::create_dir(&project).unwrap();

    let project_cache = tmp.path().join("project-cache.json");
    let explicit_cache = tmp.path().join("ci-cache.json");
    fs::write(
        project.join("nocurse.toml"),
        format!("cache_path = {:?}\n", project_cache.to_str().unwrap()),
    )
    .unwrap();
    let explicit = tmp.path().join("ci.json");
    fs::write(
        &explicit,
        serde_json::json!({ "cache_path": explicit_cache }).to_string(),
    )
    .unwrap();

    let json = info_json_with(&project, &["--config", explicit.to_str().unwrap()]);

    assert_eq!(json["config"]["cache_path"], explicit_cache.to_str().unwrap());
    assert!(config_file(&json).ends_with("ci.json"));
}

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".nocurse.toml"),
        "[source]\ntimeout_secs = 3\n",
    )
    .unwrap();

    let output = cmd()
        .env("NOCURSE_SOURCE__TIMEOUT_SECS", "25")
        .env("NOCURSE_LOG_LEVEL", "warn")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["source"]["timeout_secs"], 25);
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Formats and Errors
// =============================================================================

#[test]
fn every_extension_sets_user_agent() {
    let cases = [
        ("nocurse.toml", "[source]\nuser_agent = \"bot/toml\"\n"),
        ("nocurse.yaml", "source:\n  user_agent: bot/yaml\n"),
        ("nocurse.yml", "source:\n  user_agent: bot/yml\n"),
        ("nocurse.json", r#"{"source": {"user_agent": "bot/json"}}"#),
    ];

    for (name, contents) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();

        let json = info_json(tmp.path());
        let ext = name.rsplit('.').next().unwrap();
        assert_eq!(
            json["config"]["source"]["user_agent"],
            format!("bot/{ext}"),
            "{name}"
        );
    }
}

#[test]
fn malformed_config_fails_to_load() {
    let cases = [
        (".nocurse.toml", "[source\ntimeout_secs = 1"),
        (".nocurse.yaml", "source: [unclosed"),
        (".nocurse.json", r#"{"source": }"#),
    ];

    for (name, contents) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(name), contents).unwrap();

        cmd()
            .args(["-C", tmp.path().to_str().unwrap(), "info"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

#[test]
fn wrong_type_in_source_table_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("nocurse.toml"),
        "[source]\nretry_attempts = \"many\"\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unknown_keys_do_not_hide_known_ones() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("nocurse.toml"),
        "strictness = \"high\"\n\n[source]\nmirror = \"none\"\nretry_attempts = 2\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["source"]["retry_attempts"], 2);
}

// =============================================================================
// Boundary Marker
// =============================================================================

#[test]
fn git_boundary_hides_outer_cache_path() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let outer_cache = tmp.path().join("outer.json");
    fs::write(
        tmp.path().join("nocurse.toml"),
        format!("cache_path = {:?}\n", outer_cache.to_str().unwrap()),
    )
    .unwrap();

    let json = info_json(&src);

    assert!(json["config"]["config_file"].is_null());
    assert_ne!(json["config"]["cache_path"], outer_cache.to_str().unwrap());
}

#[test]
fn config_beside_git_directory_is_used() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".nocurse.toml"), "[source]\napi = false\n").unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["source"]["api"], false);
    assert!(config_file(&json).ends_with(".nocurse.toml"));
}

// =============================================================================
// Cache File
// =============================================================================

#[test]
fn cache_presence_follows_configured_file() {
    let tmp = TempDir::new().unwrap();
    let cache = tmp.path().join("words.json");
    fs::write(
        tmp.path().join("nocurse.toml"),
        format!("cache_path = {:?}\n", cache.to_str().unwrap()),
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["cache_path"], cache.to_str().unwrap());
    assert_eq!(json["config"]["cache_present"], false);

    fs::write(&cache, r#"["тест"]"#).unwrap();
    let json = info_json(tmp.path());
    assert_eq!(json["config"]["cache_present"], true);
}
