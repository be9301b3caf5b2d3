//! Schema command — JSON Schema of a command's `--json` output.

use clap::Args;
use tracing::{debug, instrument};

use textmetrics_core::OutputKind;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Command whose output schema to print.
    #[arg(value_enum)]
    pub kind: OutputKind,
}

/// Print the JSON Schema for one command's output.
///
/// The schema is JSON, so the global `--json` flag has no effect here.
#[instrument(name = "cmd_schema", skip_all, fields(kind = args.kind.as_str()))]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(kind = args.kind.as_str(), "executing schema command");
    let schema = args.kind.json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
