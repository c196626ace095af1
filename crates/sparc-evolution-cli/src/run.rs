use std::path::PathBuf;

use anyhow::Result;

use sparc_evolution::analysis::AnalysisResults;
use sparc_evolution::report::index::write_index;
use sparc_evolution::{ArtifactPaths, ReportGenerator};

use crate::input::ReportArgs;

/// What a `render` run produced.
#[derive(Debug)]
pub struct RenderSummary {
    pub artifacts: ArtifactPaths,
    pub index: Option<PathBuf>,
    pub analysis: Option<AnalysisResults>,
}

pub fn run_render(args: &ReportArgs) -> Result<RenderSummary> {
    let config = &args.config;
    let mut generator = ReportGenerator::from_config(config)?;

    let artifacts = generator.export_artifacts(&config.output_dir)?;
    let index = if config.write_index {
        Some(write_index(&config.output_dir, &artifacts)?)
    } else {
        None
    };
    let analysis = if args.write_analysis {
        Some(generator.export_analysis(&config.analysis_file)?)
    } else {
        None
    };

    Ok(RenderSummary {
        artifacts,
        index,
        analysis,
    })
}

pub fn run_analysis(args: &ReportArgs) -> Result<AnalysisResults> {
    let mut generator = ReportGenerator::from_config(&args.config)?;
    generator.export_analysis(&args.config.analysis_file)
}
