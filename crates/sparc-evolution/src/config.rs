use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Paths and options for one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub data_file: PathBuf,
    pub output_dir: PathBuf,
    pub analysis_file: PathBuf,
    /// Seed for the simulated curves and placeholder scores; entropy when unset.
    pub seed: Option<u64>,
    pub write_index: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("sparc_evolution_data.json"),
            output_dir: PathBuf::from("visualizations"),
            analysis_file: PathBuf::from("sparc_analysis_results.json"),
            seed: None,
            write_index: true,
        }
    }
}

/// Load a report configuration from a JSON file.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ReportConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
