//! Template promotion engine
//!
//! The [`SyncEngine`] copies candidate templates into a flat library
//! directory. Promotion is one-way and name-based:
//!
//! 1. The destination is `target / file name`; the source subdirectory is
//!    discarded, so same-named candidates from different folders collide.
//! 2. If anything already exists at the destination the candidate is
//!    skipped. Content is never compared.
//! 3. Otherwise the bytes are copied and flushed before the copy counts.
//!
//! The existence check and the copy are separate calls. Two runs sharing a
//! library can race between them; the adapter's create-new open turns the
//! losing copy into a recorded failure.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tplsync_core::domain::{CopyOutcome, FileEntry, RunSummary};
use tplsync_core::ports::IFileStore;
use tracing::{debug, warn};

/// Promotes candidates into the template library.
pub struct SyncEngine {
    store: Arc<dyn IFileStore>,
    target: PathBuf,
    dry_run: bool,
    /// Names a dry run has pretended to copy, so later collisions are
    /// reported as skips just like a real run would.
    planned: HashSet<OsString>,
}

impl SyncEngine {
    pub fn new(store: Arc<dyn IFileStore>, target: impl Into<PathBuf>) -> Self {
        Self {
            store,
            target: target.into(),
            dry_run: false,
            planned: HashSet::new(),
        }
    }

    /// Report promotions without performing them.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Flattened destination of `entry` inside the library.
    #[must_use]
    pub fn destination_for(&self, entry: &FileEntry) -> PathBuf {
        self.target.join(entry.file_name())
    }

    /// Promote `entry` and fold the outcome into `summary`.
    pub fn promote(&mut self, entry: &FileEntry, summary: &mut RunSummary) -> CopyOutcome {
        let destination = self.destination_for(entry);
        let outcome = self.copy_if_absent(entry, &destination);
        summary.record_copy(entry.path(), &outcome);
        outcome
    }

    fn copy_if_absent(&mut self, entry: &FileEntry, destination: &Path) -> CopyOutcome {
        match self.store.entry_exists(destination) {
            Ok(true) => {
                debug!(
                    path = %entry,
                    destination = %destination.display(),
                    "already in library, skipping"
                );
                return CopyOutcome::SkippedExisting;
            }
            Ok(false) => {}
            Err(err) => {
                let reason = format!(
                    "{:#}",
                    err.context(format!("failed to inspect {}", destination.display()))
                );
                warn!(path = %entry, %reason, "existence check failed");
                return CopyOutcome::Failed(reason);
            }
        }

        if self.dry_run {
            if !self.planned.insert(entry.file_name().to_os_string()) {
                debug!(path = %entry, "dry run: name already planned, skipping");
                return CopyOutcome::SkippedExisting;
            }
            debug!(
                path = %entry,
                destination = %destination.display(),
                "dry run: would copy"
            );
            return CopyOutcome::Copied;
        }

        match self.store.copy_durable(entry.path(), destination) {
            Ok(bytes) => {
                debug!(
                    path = %entry,
                    destination = %destination.display(),
                    bytes,
                    "promoted template"
                );
                CopyOutcome::Copied
            }
            Err(err) => {
                let reason = format!("{err:#}");
                warn!(path = %entry, %reason, "copy failed");
                CopyOutcome::Failed(reason)
            }
        }
    }
}
