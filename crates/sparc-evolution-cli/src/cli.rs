use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

fn with_shared_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .help("Path to report configuration file (JSON)")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data_file")
                .short('d')
                .long("data")
                .help(
                    "Path to the milestone dataset. \
                     Overrides the data file specified in the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("analysis_file")
                .short('a')
                .long("analysis-file")
                .help(
                    "File path that the analysis JSON will be written to. \
                     Overrides the analysis file specified in the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the simulated trend curves and placeholder scores.")
                .value_parser(clap::value_parser!(u64))
                .value_hint(ValueHint::Other),
        )
}

/// Argument definitions for the `sparc-analyzer` binary.
pub fn build_cli() -> Command {
    Command::new("sparc-analyzer")
        .version(clap::crate_version!())
        .about("\u{1F4CA} SPARC Evolution Analysis - milestone charts and presentation summary")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            with_shared_args(
                Command::new("render")
                    .about("Render all charts, the index page and the analysis summary"),
            )
            .arg(
                Arg::new("output_dir")
                    .short('o')
                    .long("output-dir")
                    .help(
                        "Directory the charts are written to. \
                         Overrides the output directory specified in the configuration file.",
                    )
                    .value_parser(clap::value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
            .arg(
                Arg::new("no_analysis")
                    .long("no-analysis")
                    .help("Skip writing the analysis summary JSON.")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("no_index")
                    .long("no-index")
                    .help("Skip writing index.html next to the charts.")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(with_shared_args(
            Command::new("analysis").about("Write only the analysis summary JSON"),
        ))
        .subcommand(
            Command::new("config").about("Print the default report configuration as JSON"),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
