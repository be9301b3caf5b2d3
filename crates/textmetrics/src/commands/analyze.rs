//! Analyze command — metrics, keyword density and top words in one report.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textmetrics_core::report::{self, AnalysisOptions};

use super::{density, display_name, read_input_file, stats, top};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Reading speed in words per minute.
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Number of words in the top-words ranking.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

/// Run the full analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_options: AnalysisOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, wpm = ?args.wpm, count = ?args.count, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let options = AnalysisOptions {
        words_per_minute: args.wpm.unwrap_or(config_options.words_per_minute),
        top_n: args.count.unwrap_or(config_options.top_n),
    };

    let report = report::analyze(&content, &options)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}",
        display_name(&args.file).if_supports_color(Stream::Stdout, |t| t.bold())
    );
    stats::print_metrics(&report.metrics);

    println!(
        "\n{}",
        "Keyword density".if_supports_color(Stream::Stdout, |t| t.underline())
    );
    density::print_density(&report.keyword_density);

    println!(
        "\n{}",
        format!("Top {} words", options.top_n).if_supports_color(Stream::Stdout, |t| t.underline())
    );
    top::print_top(&report.top_words);

    Ok(())
}
