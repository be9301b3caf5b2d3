//! Highlight command — mark every occurrence of a search term.

use std::fmt::Write as _;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use tracing::{debug, instrument};

use textmetrics_core::highlight::{self, Highlight, Marker, MatchSpan, Segment};

use super::read_input_file;

/// How matches are marked in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Markup {
    /// Terminal colors (square brackets when colors are unavailable).
    #[default]
    Ansi,
    /// HTML span markers (configurable via `highlight_open`/`highlight_close`).
    Html,
    /// Square brackets.
    Plain,
}

/// Arguments for the `highlight` subcommand.
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// File to search (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Term to highlight (case-insensitive, matched literally).
    #[arg(short, long)]
    pub term: String,

    /// How to mark matches.
    #[arg(long, value_enum, default_value_t)]
    pub markup: Markup,
}

#[derive(Serialize)]
struct HighlightOutput<'a> {
    term: &'a str,
    count: usize,
    matches: &'a [MatchSpan],
    highlighted: String,
}

/// Print a file with every occurrence of the search term marked.
#[instrument(name = "cmd_highlight", skip_all, fields(file = %args.file))]
pub fn cmd_highlight(
    args: HighlightArgs,
    global_json: bool,
    config_marker: Marker,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, term = %args.term, markup = ?args.markup, "executing highlight command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let found = highlight::find_occurrences(&content, &args.term)
        .with_context(|| format!("failed to search {}", args.file))?;

    let marker = match args.markup {
        Markup::Plain => Marker::brackets(),
        Markup::Ansi | Markup::Html => config_marker,
    };

    if global_json {
        let output = HighlightOutput {
            term: args.term.trim(),
            count: found.len(),
            matches: found.matches(),
            highlighted: found.render(&marker),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let rendered = match args.markup {
        Markup::Ansi => render_ansi(&found),
        Markup::Html | Markup::Plain => found.render(&marker),
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Whether owo-colors will emit escapes on stdout, honoring `--color`.
fn stdout_colors_enabled() -> bool {
    let sample = "x".if_supports_color(Stream::Stdout, |t| t.black()).to_string();
    sample != "x"
}

fn render_ansi(found: &Highlight<'_>) -> String {
    if !stdout_colors_enabled() {
        return found.render(&Marker::brackets());
    }
    let style = Style::new().black().on_yellow();
    let mut out = String::with_capacity(found.text().len());
    for segment in found.segments() {
        match segment {
            Segment::Plain(s) => out.push_str(s),
            Segment::Match(s) => {
                // Writing to a String cannot fail.
                let _ = write!(
                    out,
                    "{}",
                    s.if_supports_color(Stream::Stdout, |t| t.style(style))
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_without_color_support_falls_back_to_brackets() {
        owo_colors::set_override(false);
        let found = highlight::find_occurrences("The cat sat", "the").unwrap();
        assert_eq!(render_ansi(&found), "[The] cat sat");
    }
}
