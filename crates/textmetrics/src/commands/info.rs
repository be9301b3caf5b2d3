//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use textmetrics_core::config::{self, Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    words_per_minute: u32,
    top_n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    highlight_open: String,
    highlight_close: String,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let options = config.analysis_options();
        let marker = config.marker();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: config::user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            words_per_minute: options.words_per_minute,
            top_n: options.top_n,
            max_input_bytes: config.input_limit(),
            highlight_open: marker.open,
            highlight_close: marker.close,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    print_field("License", (!package.license.is_empty()).then_some(package.license));
    print_field(
        "Repository",
        (!package.repository.is_empty()).then_some(package.repository),
    );

    let cfg = &full_info.config;
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.underline())
    );
    match cfg.config_file {
        Some(ref path) => print_field("Config file", Some(path)),
        None => print_field("Config file", Some("none loaded")),
    }
    print_field("User config dir", cfg.user_config_dir.as_deref());
    print_field("Log level", Some(&cfg.log_level));
    print_field("Log directory", cfg.log_dir.as_deref());

    println!();
    println!(
        "{}",
        "Analysis".if_supports_color(Stream::Stdout, |t| t.underline())
    );
    print_field("Words per minute", Some(cfg.words_per_minute));
    print_field("Top words", Some(cfg.top_n));
    match cfg.max_input_bytes {
        Some(max) => print_field("Input limit", Some(format!("{max} bytes"))),
        None => print_field("Input limit", Some("disabled")),
    }
    print_field(
        "Highlight markers",
        Some(format!("{} … {}", cfg.highlight_open, cfg.highlight_close)),
    );

    Ok(())
}

/// Print a labelled value, or "(not set)" when absent.
fn print_field<T: std::fmt::Display>(label: &str, value: Option<T>) {
    let label = format!("{label}:");
    let label = label.if_supports_color(Stream::Stdout, |t| t.dimmed());
    match value {
        Some(v) => println!("{label} {v}"),
        None => println!(
            "{label} {}",
            "(not set)".if_supports_color(Stream::Stdout, |t| t.dimmed())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_succeeds() {
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &Config::default(),
            &ConfigSources::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.words_per_minute, 200);
        assert_eq!(info.top_n, 10);
        assert_eq!(
            info.max_input_bytes,
            Some(textmetrics_core::DEFAULT_MAX_INPUT_BYTES)
        );
        assert_eq!(info.highlight_close, "</span>");
    }

    #[test]
    fn test_config_info_disabled_limit() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
