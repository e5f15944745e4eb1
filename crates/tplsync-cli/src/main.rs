//! tplsync CLI - Command-line interface for tplsync
//!
//! Reconciles a task tree against a flat template library:
//! - Deletes generated `tpl<13 digits>.png` previews in place
//! - Copies every other PNG into the library unless the name is taken
//! - Prints a line per file and a final summary, then waits for Enter

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tplsync_core::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod observer;
mod output;
mod prompt;
mod report;

use commands::sync::{finish, SyncCommand};
use output::{get_formatter, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "tplsync",
    version,
    about = "Prune generated previews and promote templates into a flat library"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    sync: SyncCommand,
}

/// Load the explicit config file, or the default one if it exists.
///
/// An explicit path must load; the default path silently falls back to
/// built-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<(Config, PathBuf)> {
    match explicit {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?;
            Ok((config, path.to_path_buf()))
        }
        None => {
            let path = Config::default_path();
            Ok((Config::load_or_default(&path), path))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    let loaded = load_config(cli.config.as_deref());

    // Setup tracing
    let filter = match cli.verbose {
        0 => loaded
            .as_ref()
            .map(|(config, _)| config.logging.level.clone())
            .unwrap_or_else(|_| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match loaded {
        Ok((config, path)) => {
            info!(config_path = %path.display(), "Loaded configuration");
            config
        }
        Err(err) => {
            get_formatter(format).error(&format!("{err:#}"));
            let fallback = cli.sync.apply(Config::default());
            finish(&fallback, format);
            return Ok(());
        }
    };

    cli.sync.execute(config, format)
}
