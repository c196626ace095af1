use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use sparc_evolution::config::ReportConfig;
use sparc_evolution_cli::cli::build_cli;
use sparc_evolution_cli::input::ReportArgs;
use sparc_evolution_cli::run::{run_analysis, run_render};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "SPARC_LOG",
            "error,sparc_analyzer=info,sparc_evolution=info,sparc_evolution_cli=info",
        ))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render(render_matches),
        Some(("analysis", analysis_matches)) => handle_analysis(analysis_matches),
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&ReportConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let args = ReportArgs::from_arguments(matches)?;
    println!("[SPARC] Starting SPARC Evolution Analysis...");
    log::info!(
        "[SPARC] Rendering {:?} into {:?}",
        args.config.data_file,
        args.config.output_dir
    );

    match run_render(&args) {
        Ok(summary) => {
            println!("[SPARC] Analysis complete!");
            println!(
                "[SPARC] Generated {} visualization files in {:?}",
                summary.artifacts.iter().count(),
                args.config.output_dir
            );
            if let Some(index) = &summary.index {
                println!("[SPARC] Index page: {:?}", index);
            }
            if let Some(analysis) = &summary.analysis {
                println!(
                    "[SPARC] Analysis summary for {} milestones written to {:?}",
                    analysis.milestone_analysis.len(),
                    args.config.analysis_file
                );
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_analysis(matches: &ArgMatches) -> Result<()> {
    let args = ReportArgs::from_arguments(matches)?;
    log::info!("[SPARC] Exporting analysis for {:?}", args.config.data_file);

    match run_analysis(&args) {
        Ok(analysis) => {
            println!(
                "[SPARC] Analysis summary for {} milestones written to {:?}",
                analysis.milestone_analysis.len(),
                args.config.analysis_file
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Analysis export failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
