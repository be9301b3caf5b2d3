//! Top command — most frequent words.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textmetrics_core::ranking::{self, TopEntry};
use textmetrics_core::{FrequencyMap, text};

use super::{display_name, read_input_file};

/// Arguments for the `top` subcommand.
#[derive(Args, Debug)]
pub struct TopArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Number of words to show.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

/// Print the most frequent words in a file.
#[instrument(name = "cmd_top", skip_all, fields(file = %args.file))]
pub fn cmd_top(
    args: TopArgs,
    global_json: bool,
    config_top_n: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, count = ?args.count, "executing top command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let n = args.count.unwrap_or(config_top_n);
    let freq: FrequencyMap = text::tokenize(&content).into_iter().collect();
    let top = ranking::compute_top_n(&freq, n);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else {
        println!(
            "{}",
            display_name(&args.file).if_supports_color(Stream::Stdout, |t| t.bold())
        );
        print_top(&top);
    }

    Ok(())
}

/// Print a ranking as numbered lines.
pub(crate) fn print_top(top: &[TopEntry]) {
    if top.is_empty() {
        println!("  (no words)");
        return;
    }
    let width = top.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);
    for (rank, entry) in top.iter().enumerate() {
        println!(
            "  {:>2}. {:<width$}  {}",
            rank + 1,
            entry.word,
            entry.frequency.if_supports_color(Stream::Stdout, |t| t.green())
        );
    }
}
