//! Command-line behavior of the devhub binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Writes a config that keeps favorites inside `dir`.
fn config_in(dir: &Path) -> String {
    let config = dir.join("devhub.toml");
    let favorites = dir.join("favorites.json");
    std::fs::write(
        &config,
        format!("[favorites]\npath = {:?}\n", favorites.to_str().unwrap()),
    )
    .unwrap();
    config.to_str().unwrap().to_string()
}

fn devhub(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devhub").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("DEVHUB_CONFIG")
        .current_dir(dir.path())
        .arg("--config")
        .arg(config_in(dir.path()));
    cmd
}

fn json_slugs(output: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(output).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap().to_string())
        .collect()
}

/// The eight dashboard tools, in dashboard order.
const REGISTRY: &str = r#"[
  {"name": "Token Generator", "slug": "token-generator", "description": "Generate secure random tokens, API keys and passwords", "category": "Security", "tags": ["token", "random", "password"], "kind": "tool"},
  {"name": "UUID Generator", "slug": "uuid-generator", "description": "Generate UUID v4 and ULID identifiers", "category": "Generators", "tags": ["uuid", "ulid", "id"], "kind": "tool"},
  {"name": "JWT Decoder & Encoder", "slug": "jwt", "description": "Decode, inspect and sign JSON Web Tokens", "category": "Security", "tags": ["jwt", "token", "auth"], "kind": "tool"},
  {"name": "Base64 Encoder/Decoder", "slug": "base64", "description": "Encode and decode Base64 strings", "category": "Encoding", "tags": ["base64", "encoding"], "kind": "tool"},
  {"name": "JSON/YAML Converter", "slug": "json-yaml", "description": "Convert between JSON, YAML and TOML documents", "category": "Converters", "tags": ["json", "yaml", "toml"], "kind": "tool"},
  {"name": "Hash Generator", "slug": "hash-generator", "description": "Compute MD5, SHA-1 and SHA-256 digests", "category": "Security", "tags": ["hash", "sha256", "md5"], "kind": "tool"},
  {"name": "cURL Builder", "slug": "curl-builder", "description": "Build cURL commands for HTTP requests", "category": "Network", "tags": ["curl", "http", "api"], "kind": "tool"},
  {"name": "Color Tool", "slug": "color", "description": "Convert colors between HEX, RGB and HSL", "category": "Design", "tags": ["color", "hex", "rgb"], "kind": "tool"}
]"#;

fn registry_in(dir: &Path) -> String {
    let path = dir.join("registry.json");
    std::fs::write(&path, REGISTRY).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn search_json_ranks_converter_first() {
    let dir = TempDir::new().unwrap();
    let output = devhub(&dir)
        .arg("--catalog")
        .arg(registry_in(dir.path()))
        .args(["search", "json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let slugs = json_slugs(&output.stdout);
    assert_eq!(slugs[0], "json-yaml");
    assert!(!slugs.contains(&"color".to_string()));
}

#[test]
fn search_builtin_catalog_puts_json_converters_first() {
    let dir = TempDir::new().unwrap();
    let output = devhub(&dir)
        .args(["search", "json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let slugs = json_slugs(&output.stdout);
    assert_eq!(&slugs[..2], ["json-csv", "json-yaml"]);
}

#[test]
fn search_full_name_is_a_perfect_match() {
    let dir = TempDir::new().unwrap();
    let output = devhub(&dir)
        .arg("--catalog")
        .arg(registry_in(dir.path()))
        .args(["search", "UUID", "Generator", "--json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["slug"], "uuid-generator");
    assert!(value[0]["relevanceScore"].as_f64().unwrap() > 0.99);
}

#[test]
fn search_text_output() {
    let dir = TempDir::new().unwrap();
    devhub(&dir)
        .args(["search", "uuid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UUID Generator "))
        .stdout(predicate::str::contains("uuid-generator"))
        .stdout(predicate::str::contains("…").not());
}

#[test]
fn search_unknown_category_is_empty_not_error() {
    let dir = TempDir::new().unwrap();
    devhub(&dir)
        .args(["search", "--category", "Nonexistent", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn search_filters_by_kind_and_limit() {
    let dir = TempDir::new().unwrap();
    let output = devhub(&dir)
        .args(["search", "--kind", "cheatsheet", "--limit", "2", "--json"])
        .output()
        .unwrap();
    let slugs = json_slugs(&output.stdout);
    assert_eq!(slugs, vec!["git-cheatsheet", "regex-cheatsheet"]);
}

#[test]
fn favorites_round_trip() {
    let dir = TempDir::new().unwrap();

    devhub(&dir)
        .args(["favorite", "uuid-generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added UUID Generator"));

    let output = devhub(&dir)
        .args(["search", "--favorites", "--json"])
        .output()
        .unwrap();
    assert_eq!(json_slugs(&output.stdout), vec!["uuid-generator"]);

    devhub(&dir)
        .args(["favorites", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uuid-generator"));

    devhub(&dir)
        .args(["favorite", "uuid-generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
}

#[test]
fn favorite_unknown_slug_fails() {
    let dir = TempDir::new().unwrap();
    devhub(&dir)
        .args(["favorite", "does-not-exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn favorite_typo_suggests_closest_slug() {
    let dir = TempDir::new().unwrap();
    devhub(&dir)
        .args(["favorite", "uuid-generater"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Did you mean 'uuid-generator'?"));
}

#[test]
fn categories_in_catalog_order() {
    let dir = TempDir::new().unwrap();
    devhub(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Security\nGenerators\n"));
}

#[test]
fn custom_catalog_file() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"[{"name": "Cron Builder", "slug": "cron", "description": "Cron schedules",
             "category": "Time", "tags": ["cron"], "kind": "tool"}]"#,
    )
    .unwrap();

    let output = devhub(&dir)
        .arg("--catalog")
        .arg(&catalog)
        .args(["search", "--json"])
        .output()
        .unwrap();
    assert_eq!(json_slugs(&output.stdout), vec!["cron"]);
}

#[test]
fn invalid_config_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[search]\nthreshold = 9.0\n").unwrap();

    Command::cargo_bin("devhub")
        .unwrap()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["search", "json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("search.threshold"));
}
