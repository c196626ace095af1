//! Report generator tying the dataset, catalog and chart builders together.
//!
//! One generator owns the loaded document and the random source behind the
//! simulated curves and placeholder scores. Each chart is built, written and
//! dropped in turn; the first failure aborts the run.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use plotly::Plot;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis::{build_analysis, write_analysis, AnalysisResults};
use crate::catalog::{FeatureMatrix, MILESTONES};
use crate::config::ReportConfig;
use crate::data::{load_evolution_data, EvolutionData, Milestone};
use crate::report::plots::{
    plot_adoption_trends, plot_dashboard, plot_feature_matrix, plot_innovation_impact,
    plot_timeline,
};
use crate::simulation::{adoption_series, dashboard_series};

pub const TIMELINE_FILE: &str = "sparc_evolution_timeline.html";
pub const FEATURE_MATRIX_FILE: &str = "sparc_feature_matrix.html";
pub const ADOPTION_TRENDS_FILE: &str = "sparc_adoption_trends.html";
pub const INNOVATION_IMPACT_FILE: &str = "sparc_innovation_impact.html";
pub const DASHBOARD_FILE: &str = "sparc_comprehensive_dashboard.html";

/// Locations of the five chart artifacts under an output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub timeline: PathBuf,
    pub feature_matrix: PathBuf,
    pub adoption_trends: PathBuf,
    pub innovation_impact: PathBuf,
    pub dashboard: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        ArtifactPaths {
            timeline: dir.join(TIMELINE_FILE),
            feature_matrix: dir.join(FEATURE_MATRIX_FILE),
            adoption_trends: dir.join(ADOPTION_TRENDS_FILE),
            innovation_impact: dir.join(INNOVATION_IMPACT_FILE),
            dashboard: dir.join(DASHBOARD_FILE),
        }
    }

    /// Caption and path of each artifact, in render order.
    pub fn entries(&self) -> [(&'static str, &PathBuf); 5] {
        [
            ("Evolution Timeline", &self.timeline),
            ("Feature Evolution Matrix", &self.feature_matrix),
            ("Adoption Trends (Simulated)", &self.adoption_trends),
            ("Innovation Impact", &self.innovation_impact),
            ("Comprehensive Dashboard", &self.dashboard),
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries().into_iter().map(|(_, path)| path)
    }
}

fn write_plot(plot: &Plot, path: &Path) -> Result<()> {
    fs::write(path, plot.to_html())
        .with_context(|| format!("Failed to write chart: {}", path.display()))?;
    log::debug!("Chart written to {}", path.display());
    Ok(())
}

pub struct ReportGenerator {
    data: EvolutionData,
    rng: StdRng,
}

impl ReportGenerator {
    /// Wrap an already loaded document. Without a seed the random source is
    /// drawn from entropy.
    pub fn new(data: EvolutionData, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { data, rng }
    }

    /// Load the dataset at `path`; a missing file yields an empty document.
    pub fn load<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self> {
        let data = load_evolution_data(path)?;
        Ok(Self::new(data, seed))
    }

    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        Self::load(&config.data_file, config.seed)
    }

    pub fn data(&self) -> &EvolutionData {
        &self.data
    }

    pub fn milestones(&self) -> &IndexMap<String, Milestone> {
        &self.data.sparc_milestones
    }

    pub fn evolution_patterns(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.data.evolution_patterns
    }

    pub fn render_timeline(&self) -> Plot {
        plot_timeline(&MILESTONES)
    }

    pub fn render_feature_matrix(&self) -> Plot {
        plot_feature_matrix(&FeatureMatrix::full())
    }

    pub fn render_adoption_trends(&mut self) -> Result<Plot> {
        let series = adoption_series(&mut self.rng)?;
        Ok(plot_adoption_trends(&series))
    }

    pub fn render_impact_chart(&self) -> Plot {
        plot_innovation_impact(&MILESTONES)
    }

    pub fn render_dashboard(&mut self) -> Result<Plot> {
        let series = dashboard_series(&mut self.rng)?;
        Ok(plot_dashboard(&MILESTONES, &FeatureMatrix::dashboard(), &series))
    }

    /// Analysis record for the loaded milestones, with fresh placeholder scores.
    pub fn analysis(&mut self) -> AnalysisResults {
        build_analysis(&self.data, &mut self.rng)
    }

    /// Render every chart into `dir`, creating it when absent.
    pub fn export_artifacts<P: AsRef<Path>>(&mut self, dir: P) -> Result<ArtifactPaths> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        log::info!("Generating SPARC evolution visualizations...");

        let paths = ArtifactPaths::in_dir(dir);
        write_plot(&self.render_timeline(), &paths.timeline)?;
        write_plot(&self.render_feature_matrix(), &paths.feature_matrix)?;
        write_plot(&self.render_adoption_trends()?, &paths.adoption_trends)?;
        write_plot(&self.render_impact_chart(), &paths.innovation_impact)?;
        write_plot(&self.render_dashboard()?, &paths.dashboard)?;

        log::info!("All visualizations saved to {}", dir.display());
        Ok(paths)
    }

    /// Build the analysis record and write it to `path` as JSON.
    pub fn export_analysis<P: AsRef<Path>>(&mut self, path: P) -> Result<AnalysisResults> {
        let results = self.analysis();
        write_analysis(path, &results)?;
        Ok(results)
    }
}
