//! twconf command-line entry point.
//!
//! Loads the build configuration of a utility-class CSS project, validates
//! it, and prints what the generation engine would see.  A malformed config
//! makes every command exit non-zero with the error message, before any
//! output is produced.
//!
//! # Usage
//!
//! ```text
//! twconf [OPTIONS] <COMMAND>
//!
//! Commands:
//!   check    Load the config and print a one-line summary
//!   show     Print the normalised config
//!   theme    Print the effective theme as JSON
//!   content  List the template files the content globs select
//!
//! Options:
//!   -c, --config <PATH>  Config file [env: TWCONF_CONFIG]
//!       --dir <DIR>      Directory searched for a config file [default: .]
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`; command
//! output goes to stdout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use twconf::application::expand_content::expand_content;
use twconf::application::inspect_config::{inspect_config, render_theme};
use twconf::infrastructure::storage::config::resolve_config_path;
use twconf_core::source::loader::to_raw;
use twconf_core::{SourceFormat, ThemeCategory};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Load, validate, and inspect utility-class CSS build configuration.
#[derive(Debug, Parser)]
#[command(name = "twconf", version)]
struct Cli {
    /// Path to the config file.  When absent, the config is discovered in
    /// `--dir` (tailwind.config.toml, tailwind.config.json, twconf.toml).
    #[arg(short, long, global = true, env = "TWCONF_CONFIG")]
    config: Option<PathBuf>,

    /// Directory searched for a config file when `--config` is not given.
    #[arg(long, global = true, default_value = ".", env = "TWCONF_DIR")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the config and print a one-line summary.
    Check,

    /// Print the normalised config.
    Show {
        /// Output format: toml or json.
        #[arg(long, default_value = "toml")]
        format: SourceFormat,
    },

    /// Print the effective theme (defaults + overrides + extensions) as JSON.
    Theme {
        /// Only print this category, e.g. `colors`.
        #[arg(long)]
        category: Option<ThemeCategory>,

        /// Theme file to use as the base instead of the built-in defaults.
        #[arg(long)]
        base: Option<PathBuf>,
    },

    /// List the template files the content globs select.
    Content {
        /// Directory the globs are resolved against.  Defaults to the config
        /// file's directory for `relative` content, else the working directory.
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run(cli: Cli) -> anyhow::Result<String> {
    let path = resolve_config_path(cli.config.as_deref(), &cli.dir)?;
    let base = match &cli.command {
        Command::Theme { base, .. } => base.as_deref(),
        _ => None,
    };
    let report = inspect_config(&path, base)?;

    match cli.command {
        Command::Check => Ok(format!("{}: ok ({})", report.path.display(), report.summary)),

        Command::Show { format } => {
            let raw = to_raw(&report.descriptor);
            match format {
                SourceFormat::Toml => {
                    toml::to_string_pretty(&raw).context("failed to render config as TOML")
                }
                SourceFormat::Json => {
                    serde_json::to_string_pretty(&raw).context("failed to render config as JSON")
                }
            }
        }

        Command::Theme { category, .. } => {
            let rendered = render_theme(&report.effective_theme, category);
            serde_json::to_string_pretty(&rendered).context("failed to render theme as JSON")
        }

        Command::Content { root } => {
            let relative = report.descriptor.content().is_relative();
            let root = root.unwrap_or_else(|| default_scan_root(&report.path, relative));
            let content = expand_content(report.descriptor.content(), &root)
                .with_context(|| format!("failed to expand content globs under {}", root.display()))?;

            let mut out = format!("# root {}\n", content.root.display());
            for entry in &content.patterns {
                out.push_str(&format!("# {} ({} files)\n", entry.pattern, entry.matched));
            }
            for file in &content.files {
                out.push_str(&format!("{}\n", file.display()));
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// The config file's directory for `relative` content, else `.`.
fn default_scan_root(config_path: &Path, relative: bool) -> PathBuf {
    match config_path.parent() {
        Some(parent) if relative && !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // `RUST_LOG` overrides the level; logs go to stderr so stdout stays
    // machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("twconf {} running {:?}", env!("CARGO_PKG_VERSION"), cli.command);

    let output = run(cli)?;
    println!("{output}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
