//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Get the binary to test, running inside `dir`.
fn blueprint(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blueprint").unwrap();
    cmd.current_dir(dir.path()).env_remove("BLUEPRINT_OUT_DIR").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    let temp = assert_fs::TempDir::new().unwrap();
    blueprint(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_version_flag() {
    let temp = assert_fs::TempDir::new().unwrap();
    blueprint(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_default_command_exports_into_out() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow assets generated:"))
        .stdout(predicate::str::contains("workflow-blueprint.json"))
        .stdout(predicate::str::contains("workflow-playbook.md"));

    temp.child("out/workflow-blueprint.json").assert(predicate::path::is_file());
    temp.child("out/workflow-playbook.md")
        .assert(predicate::str::starts_with("# TikTok Wattpad Imagines Automation Blueprint"));
}

#[test]
fn test_export_twice_succeeds() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp).args(["export", "--out", "artifacts"]).assert().success();
    blueprint(&temp).args(["export", "--out", "artifacts"]).assert().success();

    temp.child("artifacts/workflow-blueprint.json")
        .assert(predicate::str::contains("\"generatedAt\""));
}

#[test]
fn test_export_out_dir_from_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".blueprint.toml").write_str("[export]\nout_dir = \"from-config\"\n").unwrap();

    blueprint(&temp).arg("export").assert().success();

    temp.child("from-config/workflow-playbook.md").assert(predicate::path::is_file());
}

#[test]
fn test_export_into_file_path_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("blocker").write_str("not a directory").unwrap();

    blueprint(&temp)
        .args(["export", "--out", "blocker/out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create directory"));
}

#[test]
fn test_export_includes_setup_sections() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp).assert().success();

    temp.child("out/workflow-playbook.md")
        .assert(predicate::str::contains("## Setup Checklist"))
        .assert(predicate::str::contains("## Sheet Header Template"));
}

// ============================================================================
// Render Tests
// ============================================================================

#[test]
fn test_render_json() {
    let temp = assert_fs::TempDir::new().unwrap();

    let output = blueprint(&temp).args(["render", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["workflow"]["title"], "TikTok Wattpad Imagines Automation Blueprint");
    assert!(value["codeSnippets"]["scoring"].is_string());

    // Nothing is written when rendering.
    temp.child("out").assert(predicate::path::missing());
}

#[test]
fn test_render_markdown() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp)
        .args(["render", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Code Snippet · Scoring & Caption Builder"));
}

#[test]
fn test_render_rejects_unknown_format() {
    let temp = assert_fs::TempDir::new().unwrap();
    blueprint(&temp).args(["render", "--format", "html"]).assert().failure();
}

// ============================================================================
// Validate Tests
// ============================================================================

#[test]
fn test_validate_builtin() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 modules"));
}

#[test]
fn test_validate_rejects_duplicate_step_ids() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("flow.yaml")
        .write_str(
            r"
title: Broken
narrative: n
goal: g
keyTools: []
modules:
  - id: a
    title: A
    purpose: p
    trigger: true
    steps:
      - { id: same, title: One, service: S, action: X, description: d, fields: [] }
  - id: b
    title: B
    purpose: p
    trigger: false
    steps:
      - { id: same, title: Two, service: S, action: Y, description: d, fields: [] }
assets: []
posting: { timingLabel: t, timezone: UTC, recommendedSlots: [], rationale: r }
captionTemplate: { approach: a, prompt: p, structure: [] }
hashtags: []
",
        )
        .unwrap();

    blueprint(&temp)
        .args(["validate", "--workflow", "flow.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate step identifier 'same'"));
}

#[test]
fn test_validate_with_snippet_override() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("digest.js").write_str("return {};\n").unwrap();

    blueprint(&temp)
        .args(["validate", "--digest", "digest.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Digest Formatter (digest): 1 lines"));
}

// ============================================================================
// Config & Completions Tests
// ============================================================================

#[test]
fn test_config_shows_defaults() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("log_level = \"warn\""));
}

#[test]
fn test_config_out_dir_relative_to_config_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("conf/blueprint.toml").write_str("[export]\nout_dir = \"artifacts\"\n").unwrap();

    blueprint(&temp).args(["--config", "conf/blueprint.toml", "export"]).assert().success();

    temp.child("conf/artifacts/workflow-blueprint.json").assert(predicate::path::is_file());
    temp.child("artifacts").assert(predicate::path::missing());
}

#[test]
fn test_verbose_reports_loaded_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".blueprint.toml").write_str("[general]\nlog_level = \"warn\"\n").unwrap();

    blueprint(&temp)
        .args(["--verbose", "validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded config"))
        .stderr(predicate::str::contains(".blueprint.toml"));
}

#[test]
fn test_explicit_config_file_missing() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp)
        .args(["--config", "missing.toml", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_completions_bash() {
    let temp = assert_fs::TempDir::new().unwrap();

    blueprint(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blueprint"));
}
