//! Stats command — word, character, line and unique-word counts.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textmetrics_core::metrics::{self, TextMetrics};

use super::{display_name, read_input_file};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Reading speed in words per minute.
    #[arg(long)]
    pub wpm: Option<u32>,
}

/// Print counts and reading time for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    config_wpm: u32,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, wpm = ?args.wpm, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let wpm = args.wpm.unwrap_or(config_wpm);

    let report = metrics::compute_metrics_with_speed(&content, wpm)
        .with_context(|| format!("failed to compute metrics for {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}",
            display_name(&args.file).if_supports_color(Stream::Stdout, |t| t.bold())
        );
        print_metrics(&report);
    }

    Ok(())
}

/// Print the metrics block shared by `stats` and `analyze`.
pub(crate) fn print_metrics(m: &TextMetrics) {
    let rows = [
        ("Words:", m.word_count.to_string()),
        ("Characters:", m.char_count.to_string()),
        ("Lines:", m.line_count.to_string()),
        ("Unique words:", m.unique_word_count.to_string()),
        ("Reading time:", m.reading_time.to_string()),
    ];
    for (label, value) in rows {
        println!(
            "  {} {value}",
            format!("{label:<14}").if_supports_color(Stream::Stdout, |t| t.cyan()),
        );
    }
}
