//! Density command — keyword density for every distinct word.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textmetrics_core::density::{self, KeywordDensity};
use textmetrics_core::{FrequencyMap, text};

use super::{display_name, read_input_file};

/// Arguments for the `density` subcommand.
#[derive(Args, Debug)]
pub struct DensityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Print the keyword density table for a file.
#[instrument(name = "cmd_density", skip_all, fields(file = %args.file))]
pub fn cmd_density(
    args: DensityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing density command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let tokens = text::tokenize(&content);
    let total = tokens.len();
    let freq: FrequencyMap = tokens.into_iter().collect();
    let table = density::compute_keyword_density(&freq, total);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        println!(
            "{}",
            display_name(&args.file).if_supports_color(Stream::Stdout, |t| t.bold())
        );
        print_density(&table);
    }

    Ok(())
}

/// Print a density table, one word per line.
pub(crate) fn print_density(table: &[KeywordDensity]) {
    if table.is_empty() {
        println!("  (no words)");
        return;
    }
    let width = table
        .iter()
        .map(|d| d.word.chars().count())
        .max()
        .unwrap_or(0);
    for d in table {
        println!(
            "  {:<width$}  {:>6.2}%  ({})",
            d.word, d.percentage, d.count
        );
    }
}
