//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `sparc-analyzer` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

const DATA: &str = r#"{
  "sparc_milestones": {
    "sparc": {"name": "Original SPARC", "key_innovations": ["Structured prompting"]},
    "claude_flow_repo": {"name": "Claude-Flow Repo", "key_innovations": []}
  },
  "evolution_patterns": {}
}"#;

fn cmd() -> Command {
    Command::cargo_bin("sparc-analyzer").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("analysis"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sparc-analyzer"));
}

#[test]
fn config_prints_template() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data_file\""))
        .stdout(predicate::str::contains("\"output_dir\""))
        .stdout(predicate::str::contains("sparc_analysis_results.json"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_charts_index_and_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    std::fs::write(&data, DATA).unwrap();
    let out = dir.path().join("charts");
    let analysis = dir.path().join("analysis.json");

    cmd()
        .arg("render")
        .arg("-d")
        .arg(&data)
        .arg("-o")
        .arg(&out)
        .arg("-a")
        .arg(&analysis)
        .args(["--seed", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 visualization files"))
        .stderr(predicate::str::contains("No config file provided"));

    assert!(out.join("sparc_evolution_timeline.html").is_file());
    assert!(out.join("sparc_comprehensive_dashboard.html").is_file());
    assert!(out.join("index.html").is_file());

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&analysis).unwrap()).unwrap();
    assert_eq!(written["milestone_analysis"]["claude_flow_repo"]["key_innovation"], "N/A");
}

#[test]
fn render_without_index_or_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts");
    let analysis = dir.path().join("analysis.json");

    cmd()
        .arg("render")
        .arg("-d")
        .arg(dir.path().join("absent.json"))
        .arg("-o")
        .arg(&out)
        .arg("-a")
        .arg(&analysis)
        .args(["--no-index", "--no-analysis"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 5);
    assert!(!out.join("index.html").exists());
    assert!(!analysis.exists());
}

#[test]
fn render_nonexistent_config_errors() {
    cmd()
        .args(["render", "/nonexistent/config.json"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// analysis
// ---------------------------------------------------------------------------

#[test]
fn analysis_malformed_data_errors() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    std::fs::write(&data, "{ broken").unwrap();

    cmd()
        .arg("analysis")
        .arg("-d")
        .arg(&data)
        .arg("-a")
        .arg(dir.path().join("analysis.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse data file"));
}

#[test]
fn analysis_rejects_output_dir_flag() {
    cmd()
        .args(["analysis", "--output-dir", "somewhere"])
        .assert()
        .failure();
}
