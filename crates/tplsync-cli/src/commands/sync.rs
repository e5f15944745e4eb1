//! Sync command - Prune previews and promote templates
//!
//! The one thing `tplsync` does:
//! 1. Applies command-line overrides on top of the loaded configuration
//! 2. Validates the result
//! 3. Runs the Reconciler with a console observer
//! 4. Prints the report and, unless disabled, waits for Enter

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tplsync_core::config::{Config, ConfigBuilder};
use tracing::{debug, info};

use crate::observer::ConsoleObserver;
use crate::output::{get_formatter, OutputFormat};
use crate::prompt::wait_for_confirmation;
use crate::report::render_report;

/// Options for a reconciliation run
#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Source directory path [default: tasks]
    #[arg(long = "src", value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Target directory path [default: templates]
    #[arg(long = "tgt", value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Show what would be done without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_wait: bool,
}

impl SyncCommand {
    /// Merge these options into `config`. Flags win over file values.
    pub fn apply(&self, config: Config) -> Config {
        self.overrides(config).build()
    }

    fn overrides(&self, config: Config) -> ConfigBuilder {
        let mut builder = ConfigBuilder::from_config(config);
        if let Some(source) = &self.source {
            builder = builder.source(source.clone());
        }
        if let Some(target) = &self.target {
            builder = builder.target(target.clone());
        }
        if self.dry_run {
            builder = builder.dry_run(true);
        }
        if self.no_wait {
            builder = builder.wait_for_confirmation(false);
        }
        builder
    }

    /// Execute a run against `config` and report the outcome.
    ///
    /// Every outcome, including a failed bootstrap or walk, returns `Ok`:
    /// errors are reported on the console only.
    pub fn execute(&self, config: Config, format: OutputFormat) -> Result<()> {
        use tplsync_sync::{LocalFileStore, Reconciler};

        let formatter = get_formatter(format);
        let builder = self.overrides(config);
        let config = match builder.clone().build_validated() {
            Ok(config) => config,
            Err(errors) => {
                for err in &errors {
                    formatter.error(&format!("Invalid configuration: {err}"));
                }
                finish(&builder.build(), format);
                return Ok(());
            }
        };

        info!(
            source = %config.sync.source.display(),
            target = %config.sync.target.display(),
            dry_run = config.sync.dry_run,
            "Starting reconciliation"
        );
        if config.sync.dry_run {
            formatter.info("Dry run mode - no changes will be made");
        }

        let reconciler = Reconciler::new(
            Arc::new(LocalFileStore::new()),
            &config.sync.source,
            &config.sync.target,
        )
        .with_dry_run(config.sync.dry_run);

        let observer = ConsoleObserver::new(formatter.as_ref(), config.sync.dry_run);
        let outcome = reconciler.run(&observer);

        render_report(&outcome, config.sync.dry_run, format, formatter.as_ref());
        finish(&config, format);
        Ok(())
    }
}

/// Block on the confirmation prompt when the configuration asks for it.
///
/// In JSON mode the prompt goes to stderr so stdout stays parseable.
pub fn finish(config: &Config, format: OutputFormat) {
    if !config.prompt.wait_for_confirmation {
        return;
    }
    let stdin = io::stdin();
    let result = match format {
        OutputFormat::Human => wait_for_confirmation(stdin.lock(), io::stdout()),
        OutputFormat::Json => wait_for_confirmation(stdin.lock(), io::stderr()),
    };
    if let Err(err) = result {
        debug!(%err, "confirmation prompt failed");
    }
}
