//! Narrative analysis export consumed by the presentation tooling.
//!
//! Apart from the per-milestone names and lead innovations, the content is
//! fixed text. The numeric scores are uniform placeholders until a real
//! assessment exists.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::MILESTONES;
use crate::data::EvolutionData;

/// Range of the placeholder impact score.
pub const IMPACT_RANGE: std::ops::Range<f64> = 7.0..10.0;
/// Range of the placeholder complexity level.
pub const COMPLEXITY_RANGE: std::ops::Range<f64> = 3.0..9.0;

const SUMMARY_INNOVATIONS: [&str; 4] = [
    "Structured AI-assisted development methodology",
    "Package ecosystem development",
    "Advanced swarm coordination",
    "Production-ready platform",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Focus on community growth metrics for presentation",
    "Highlight swarm coordination as key differentiator",
    "Emphasize Reuven Cohen's vision throughout",
    "Include live demos of each milestone evolution",
];

const TALKING_POINTS: [&str; 5] = [
    "SPARC started as a methodology, evolved into an ecosystem",
    "Each milestone solved specific developer pain points",
    "Claude-Flow represents the culmination of 2+ years of innovation",
    "Community adoption shows real-world validation",
    "Future roadmap includes AI-native development patterns",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionSummary {
    pub total_milestones: usize,
    pub timeline_span: String,
    pub key_innovations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneAnalysis {
    pub name: String,
    pub key_innovation: String,
    pub impact_score: f64,
    pub complexity_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub evolution_summary: EvolutionSummary,
    pub milestone_analysis: IndexMap<String, MilestoneAnalysis>,
    pub recommendations: Vec<String>,
    pub presentation_talking_points: Vec<String>,
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Assemble the export record: one entry per loaded milestone, in file order.
pub fn build_analysis<R: Rng + ?Sized>(data: &EvolutionData, rng: &mut R) -> AnalysisResults {
    let milestone_analysis = data
        .sparc_milestones
        .iter()
        .map(|(key, milestone)| {
            let entry = MilestoneAnalysis {
                name: milestone.name.clone(),
                key_innovation: milestone.lead_innovation().to_string(),
                impact_score: rng.gen_range(IMPACT_RANGE),
                complexity_level: rng.gen_range(COMPLEXITY_RANGE),
            };
            (key.clone(), entry)
        })
        .collect();

    AnalysisResults {
        evolution_summary: EvolutionSummary {
            total_milestones: MILESTONES.len(),
            timeline_span: "2023-2025".to_string(),
            key_innovations: owned(&SUMMARY_INNOVATIONS),
        },
        milestone_analysis,
        recommendations: owned(&RECOMMENDATIONS),
        presentation_talking_points: owned(&TALKING_POINTS),
    }
}

/// Write the record as pretty-printed JSON.
pub fn write_analysis<P: AsRef<Path>>(path: P, results: &AnalysisResults) -> Result<()> {
    let json =
        serde_json::to_string_pretty(results).context("Failed to serialize analysis results")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write analysis results: {}", path.as_ref().display()))?;
    log::info!("Analysis results exported to {}", path.as_ref().display());
    Ok(())
}
