//! Integration tests for loading the milestone dataset.

mod common;

use sparc_evolution::data::{load_evolution_data, read_evolution_data, NO_INNOVATION};
use sparc_evolution::error::DataError;
use sparc_evolution::ReportGenerator;

use common::{write_fixture, FIVE_MILESTONES};

// ---------------------------------------------------------------------------
// Well-formed documents
// ---------------------------------------------------------------------------

#[test]
fn loads_five_milestones_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.json", FIVE_MILESTONES);

    let data = load_evolution_data(&path).unwrap();
    let keys: Vec<&str> = data.sparc_milestones.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["sparc", "sparc2", "create_sparc", "claude_flow_npm", "claude_flow_repo"]
    );
}

#[test]
fn preserves_names_and_innovations_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.json", FIVE_MILESTONES);

    let data = load_evolution_data(&path).unwrap();
    let npm = data.milestone("claude_flow_npm").unwrap();
    assert_eq!(npm.name, "Claude-Flow NPM");
    assert_eq!(npm.key_innovations, vec!["Swarm coordination", "MCP tools"]);

    let repo = data.milestone("claude_flow_repo").unwrap();
    assert!(repo.key_innovations.is_empty());
    assert_eq!(repo.lead_innovation(), NO_INNOVATION);
}

#[test]
fn keeps_extra_fields_and_patterns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.json", FIVE_MILESTONES);

    let data = load_evolution_data(&path).unwrap();
    let sparc = data.milestone("sparc").unwrap();
    assert_eq!(sparc.extra.get("date").and_then(|v| v.as_str()), Some("2023-06"));
    assert_eq!(data.evolution_patterns.len(), 2);
    assert_eq!(
        data.evolution_patterns.get("complexity_trend").and_then(|v| v.as_str()),
        Some("increasing")
    );
}

#[test]
fn missing_innovation_list_defaults_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "data.json",
        r#"{"sparc_milestones": {"a": {"name": "X"}}, "evolution_patterns": {}}"#,
    );

    let data = load_evolution_data(&path).unwrap();
    assert_eq!(data.milestone("a").unwrap().lead_innovation(), "N/A");
}

#[test]
fn generator_exposes_loaded_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.json", FIVE_MILESTONES);

    let generator = ReportGenerator::load(&path, Some(1)).unwrap();
    let keys: Vec<&str> = generator.milestones().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["sparc", "sparc2", "create_sparc", "claude_flow_npm", "claude_flow_repo"]
    );
    assert_eq!(
        generator.evolution_patterns().get("complexity_trend").and_then(|v| v.as_str()),
        Some("increasing")
    );
    assert!(!generator.data().is_empty());
    assert_eq!(generator.data().milestone("sparc2").unwrap().name, "SPARC2 Package");

    let missing = ReportGenerator::load(dir.path().join("absent.json"), Some(1)).unwrap();
    assert!(missing.data().is_empty());
    assert!(missing.milestones().is_empty());
    assert!(missing.evolution_patterns().is_empty());
}

// ---------------------------------------------------------------------------
// Missing and malformed input
// ---------------------------------------------------------------------------

#[test]
fn missing_file_yields_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let data = load_evolution_data(dir.path().join("absent.json")).unwrap();
    assert!(data.is_empty());
    assert!(data.sparc_milestones.is_empty());
    assert!(data.evolution_patterns.is_empty());
}

#[test]
fn strict_read_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_evolution_data(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DataError::NotFound(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.json", "{ not json");
    assert!(matches!(read_evolution_data(&path), Err(DataError::Parse(_, _))));
    assert!(load_evolution_data(&path).is_err());
}

#[test]
fn missing_top_level_key_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "data.json", r#"{"sparc_milestones": {}}"#);
    assert!(load_evolution_data(&path).is_err());
}

#[test]
fn directory_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_evolution_data(dir.path()).is_err());
}
