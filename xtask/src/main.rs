//! Build helpers: man pages and shell completions for the `textmetrics` CLI.
//!
//! ```text
//! cargo run -p xtask -- man --out target/man
//! cargo run -p xtask -- completions --out target/completions
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project automation")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages (one per subcommand)
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().command {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out } => generate_completions(&out),
    }
}

fn generate_man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let cmd = textmetrics::command();
    let name = cmd.get_name().to_string();
    write_man_page(out, &name, cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let page = format!("{name}-{}", sub.get_name());
        write_man_page(out, &page, sub.clone())?;
    }

    println!("man pages written to {}", out.display());
    Ok(())
}

fn write_man_page(out: &Path, page: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buf)
        .with_context(|| format!("failed to render man page {page}"))?;
    let path = out.join(format!("{page}.1"));
    fs::write(&path, buf).with_context(|| format!("failed to write {}", path.display()))
}

fn generate_completions(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let mut cmd = textmetrics::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "textmetrics", out)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
