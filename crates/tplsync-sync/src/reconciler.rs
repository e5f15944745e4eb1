//! Run driver
//!
//! A [`Reconciler`] owns one reconciliation of a source tree against a
//! template library:
//!
//! 1. **Bootstrap**: create the library directory if it is missing. Failure
//!    ends the run before anything is walked.
//! 2. **Walk**: classify every file the [`PathScanner`] yields and route it
//!    to the [`Pruner`] (ephemeral) or the [`SyncEngine`] (candidate).
//!    Other files are counted and left alone.
//! 3. **Finish**: stamp the summary and hand it back, together with the
//!    fatal error if the bootstrap or the walk failed.
//!
//! Per-file failures are never fatal. A traversal error stops the walk but
//! keeps every outcome recorded up to that point.

use std::path::PathBuf;
use std::sync::Arc;

use tplsync_core::domain::{Classification, Classifier, CopyOutcome, DeleteOutcome, RunSummary};
use tplsync_core::ports::{IFileStore, IRunObserver};
use tracing::{error, info, instrument};

use crate::engine::SyncEngine;
use crate::pruner::Pruner;
use crate::scanner::PathScanner;
use crate::SyncError;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Totals and per-file failures
    pub summary: RunSummary,
    /// Set when the run stopped early
    pub error: Option<SyncError>,
}

impl RunOutcome {
    /// True when the walk covered the whole tree.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Prunes and promotes one source tree into one template library.
pub struct Reconciler {
    store: Arc<dyn IFileStore>,
    source: PathBuf,
    target: PathBuf,
    classifier: Classifier,
    dry_run: bool,
}

impl Reconciler {
    pub fn new(
        store: Arc<dyn IFileStore>,
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            source: source.into(),
            target: target.into(),
            classifier: Classifier::new(),
            dry_run: false,
        }
    }

    /// Walk and classify but change nothing on disk.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run a full reconciliation, reporting each file to `observer`.
    #[instrument(
        skip(self, observer),
        fields(source = %self.source.display(), target = %self.target.display(), dry_run = self.dry_run)
    )]
    pub fn run(&self, observer: &dyn IRunObserver) -> RunOutcome {
        let mut summary = RunSummary::new();

        if let Err(err) = self.bootstrap() {
            error!(%err, "bootstrap failed");
            summary.finish();
            return RunOutcome {
                summary,
                error: Some(err),
            };
        }

        let pruner = Pruner::new(Arc::clone(&self.store)).with_dry_run(self.dry_run);
        let mut engine =
            SyncEngine::new(Arc::clone(&self.store), &self.target).with_dry_run(self.dry_run);

        for item in PathScanner::new(&self.source) {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    error!(%err, "walk aborted");
                    summary.finish();
                    return RunOutcome {
                        summary,
                        error: Some(err),
                    };
                }
            };

            match self.classifier.classify_entry(&entry) {
                Classification::Ignored => summary.record_ignored(),
                Classification::Ephemeral => match pruner.prune(&entry, &mut summary) {
                    DeleteOutcome::Deleted => observer.on_deleted(entry.path()),
                    DeleteOutcome::Failed(reason) => observer.on_failed(entry.path(), &reason),
                },
                Classification::Candidate => {
                    let destination = engine.destination_for(&entry);
                    match engine.promote(&entry, &mut summary) {
                        CopyOutcome::Copied => observer.on_copied(entry.path(), &destination),
                        CopyOutcome::SkippedExisting => {
                            observer.on_skipped(entry.path(), &destination)
                        }
                        CopyOutcome::Failed(reason) => observer.on_failed(entry.path(), &reason),
                    }
                }
            }
        }

        summary.finish();
        info!(
            deleted = summary.deleted_count,
            copied = summary.copied_count,
            skipped = summary.skipped_count,
            failures = summary.failures.len(),
            duration_ms = summary.duration_ms,
            "run complete"
        );
        RunOutcome {
            summary,
            error: None,
        }
    }

    fn bootstrap(&self) -> Result<(), SyncError> {
        if self.dry_run {
            info!("dry run: not creating target directory");
            return Ok(());
        }
        self.store
            .create_dir_all(&self.target)
            .map_err(|err| SyncError::Bootstrap {
                path: self.target.clone(),
                reason: format!("{err:#}"),
            })
    }
}
