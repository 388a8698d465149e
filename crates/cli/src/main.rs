use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use diffcov_core::{CollectionReducer, ValueReducer};
use differential_coverage::commands::{
    corpus_command, relcov_command, relscore_command, reliability_command, GlobalArgs, RunOptions,
};
use differential_coverage::init_logging;
use differential_coverage::output::OutputFormat;

const CAMPAIGN_DIR_HELP: &str = "Campaign directory: one subdirectory per approach, each \
containing afl-showmap coverage files (id:count per line).";

/// Differential coverage: compare testing tools by the coverage they reach.
///
/// This CLI is a thin wrapper around `diffcov-core` (exposed in code as
/// `diffcov_core`). All scoring logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "differential-coverage",
    version,
    about = "Compute differential coverage (relscore, relcov) from afl-showmap coverage",
    long_about = None
)]
struct Cli {
    /// Keep only approaches matching this name or regex. Repeatable; an
    /// approach is kept if it matches any pattern.
    #[arg(short = 'i', long = "include-approach", value_name = "PATTERN", global = true)]
    include_approach: Vec<String>,

    /// Drop approaches matching this name or regex. Repeatable; applied after
    /// --include-approach.
    #[arg(short = 'x', long = "exclude-approach", value_name = "PATTERN", global = true)]
    exclude_approach: Vec<String>,

    /// Output format (default: plain text).
    #[arg(short = 'o', long, value_enum, value_name = "FORMAT", global = true)]
    output: Option<OutputFormat>,

    /// Colour LaTeX cells by value (requires \usepackage[table]{xcolor}).
    #[arg(long, default_value_t = false, global = true)]
    latex_color: bool,

    /// Colour map for coloured LaTeX output: viridis, plasma, magma, inferno.
    #[arg(short = 'c', long, value_name = "NAME", global = true)]
    colormap: Option<String>,

    /// Rotate LaTeX table column headers by this angle in degrees.
    #[arg(long, value_name = "DEGREES", global = true)]
    latex_rotate_headers: Option<f64>,

    /// Optional JSON/YAML file with default options.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log filter for diagnostics on stderr (e.g. warn, debug).
    #[arg(long, default_value = "warn", global = true)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute relscore: one score per approach.
    Relscore {
        #[arg(help = CAMPAIGN_DIR_HELP)]
        dir: String,
    },

    /// Compute relcov of each approach against reference approaches.
    ///
    /// Prints a table (all approaches × all approaches as reference) unless
    /// --single names one reference.
    Relcov {
        #[arg(help = CAMPAIGN_DIR_HELP)]
        dir: String,

        /// Only score against this reference approach.
        #[arg(short = 's', long, value_name = "APPROACH")]
        single: Option<String>,

        /// How to reduce per-trial values: median, min, max, average.
        #[arg(long, value_name = "REDUCER")]
        value_reducer: Option<ValueReducer>,

        /// How to reduce the reference's trials: union, intersection.
        #[arg(long, value_name = "REDUCER")]
        collection_reducer: Option<CollectionReducer>,
    },

    /// Compute relcov reliability (self-consistency) of each approach.
    RelcovReliability {
        #[arg(help = CAMPAIGN_DIR_HELP)]
        dir: String,
    },

    /// Compute relcov performance over single-trial input corpora.
    ///
    /// Prints a table (all approaches × all single-trial approaches) unless
    /// --single names one corpus.
    RelcovCorpus {
        #[arg(help = CAMPAIGN_DIR_HELP)]
        dir: String,

        /// Only score against this corpus approach (must have one trial).
        #[arg(short = 's', long, value_name = "APPROACH")]
        single: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    let options = RunOptions::resolve(GlobalArgs {
        include: cli.include_approach,
        exclude: cli.exclude_approach,
        output: cli.output,
        latex_color: cli.latex_color,
        colormap: cli.colormap,
        latex_rotate_headers: cli.latex_rotate_headers,
        config: cli.config,
    })?;

    let rendered = match cli.command {
        Command::Relscore { dir } => relscore_command(&dir, &options)?,
        Command::Relcov { dir, single, value_reducer, collection_reducer } => {
            relcov_command(&dir, single.as_deref(), value_reducer, collection_reducer, &options)?
        }
        Command::RelcovReliability { dir } => reliability_command(&dir, &options)?,
        Command::RelcovCorpus { dir, single } => corpus_command(&dir, single.as_deref(), &options)?,
    };
    print!("{rendered}");

    Ok(())
}
