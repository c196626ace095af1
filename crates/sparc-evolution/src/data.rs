//! Milestone dataset model and loading.
//!
//! The input document carries a `sparc_milestones` mapping (key to name and
//! innovations) and an opaque `evolution_patterns` block. Milestone order is
//! the order of keys in the file.
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::MILESTONES;
use crate::error::DataError;

/// Sentinel used in the analysis export when a milestone lists no innovations.
pub const NO_INNOVATION: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Display name
    pub name: String,
    /// Innovations in the order the document lists them
    #[serde(default)]
    pub key_innovations: Vec<String>,
    /// Any further fields of the record, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Milestone {
    /// First listed innovation, or [`NO_INNOVATION`] when the list is empty.
    pub fn lead_innovation(&self) -> &str {
        self.key_innovations
            .first()
            .map(String::as_str)
            .unwrap_or(NO_INNOVATION)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub sparc_milestones: IndexMap<String, Milestone>,
    pub evolution_patterns: serde_json::Map<String, serde_json::Value>,
}

impl EvolutionData {
    pub fn is_empty(&self) -> bool {
        self.sparc_milestones.is_empty() && self.evolution_patterns.is_empty()
    }

    pub fn milestone(&self, key: &str) -> Option<&Milestone> {
        self.sparc_milestones.get(key)
    }
}

/// Read and parse the dataset, reporting a missing file as [`DataError::NotFound`].
pub fn read_evolution_data<P: AsRef<Path>>(path: P) -> Result<EvolutionData, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DataError::NotFound(path.to_path_buf()),
        _ => DataError::Io(path.to_path_buf(), err),
    })?;
    serde_json::from_str(&content).map_err(|err| DataError::Parse(path.to_path_buf(), err))
}

/// Load the dataset, substituting an empty document when the file is missing.
///
/// Every other failure (unreadable file, malformed JSON, missing top-level
/// keys) is returned to the caller.
pub fn load_evolution_data<P: AsRef<Path>>(path: P) -> Result<EvolutionData> {
    let data = match read_evolution_data(&path) {
        Ok(data) => data,
        Err(DataError::NotFound(missing)) => {
            log::error!("Data file {} not found!", missing.display());
            EvolutionData::default()
        }
        Err(err) => return Err(err.into()),
    };

    log::info!(
        "Loaded {} milestones and {} evolution patterns from {}",
        data.sparc_milestones.len(),
        data.evolution_patterns.len(),
        path.as_ref().display()
    );
    if !data.sparc_milestones.is_empty() && data.sparc_milestones.len() != MILESTONES.len() {
        log::warn!(
            "Dataset lists {} milestones but charts always show the {} catalog milestones",
            data.sparc_milestones.len(),
            MILESTONES.len()
        );
    }

    Ok(data)
}
