#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const FIVE_MILESTONES: &str = r#"{
  "sparc_milestones": {
    "sparc": {
      "name": "Original SPARC",
      "key_innovations": ["Specification, Pseudocode, Architecture, Refinement, Completion", "Prompt templates"],
      "date": "2023-06"
    },
    "sparc2": {
      "name": "SPARC2 Package",
      "key_innovations": ["Python package distribution"]
    },
    "create_sparc": {
      "name": "Create-SPARC",
      "key_innovations": ["Project scaffolding"]
    },
    "claude_flow_npm": {
      "name": "Claude-Flow NPM",
      "key_innovations": ["Swarm coordination", "MCP tools"]
    },
    "claude_flow_repo": {
      "name": "Claude-Flow Repo",
      "key_innovations": []
    }
  },
  "evolution_patterns": {
    "complexity_trend": "increasing",
    "phases": ["methodology", "tooling", "platform"]
  }
}"#;

pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
