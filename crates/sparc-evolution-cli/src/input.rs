use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;

use sparc_evolution::config::{load_report_config, ReportConfig};

/// Report configuration after layering command line overrides on the file.
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub config: ReportConfig,
    pub write_analysis: bool,
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

impl ReportArgs {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
            log::info!("[SPARC] Using config: {:?}", config_path);
            load_report_config(config_path)?
        } else {
            let default_config = ReportConfig::default();
            eprintln!("[SPARC] No config file provided; using defaults.");
            default_config
        };

        // Apply CLI overrides
        if let Some(data_file) = matches.get_one::<PathBuf>("data_file") {
            config.data_file = data_file.clone();
        }

        if let Some(analysis_file) = matches.get_one::<PathBuf>("analysis_file") {
            config.analysis_file = analysis_file.clone();
        }

        if let Ok(Some(output_dir)) = matches.try_get_one::<PathBuf>("output_dir") {
            config.output_dir = output_dir.clone();
        }

        if let Some(seed) = matches.get_one::<u64>("seed") {
            config.seed = Some(*seed);
        }

        if flag(matches, "no_index") {
            config.write_index = false;
        }

        Ok(ReportArgs {
            config,
            write_analysis: !flag(matches, "no_analysis"),
        })
    }
}
