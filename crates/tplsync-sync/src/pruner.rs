//! Ephemeral preview pruning

use std::sync::Arc;

use tplsync_core::domain::{DeleteOutcome, FileEntry, RunSummary};
use tplsync_core::ports::IFileStore;
use tracing::{debug, warn};

/// Deletes generated preview files in place.
///
/// A failed delete is recorded in the summary and never stops the run.
pub struct Pruner {
    store: Arc<dyn IFileStore>,
    dry_run: bool,
}

impl Pruner {
    pub fn new(store: Arc<dyn IFileStore>) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Report deletions without performing them.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Delete `entry` and fold the outcome into `summary`.
    pub fn prune(&self, entry: &FileEntry, summary: &mut RunSummary) -> DeleteOutcome {
        let outcome = if self.dry_run {
            debug!(path = %entry, "dry run: would delete");
            DeleteOutcome::Deleted
        } else {
            match self.store.remove_file(entry.path()) {
                Ok(()) => {
                    debug!(path = %entry, "deleted ephemeral preview");
                    DeleteOutcome::Deleted
                }
                Err(err) => {
                    let reason = format!("{err:#}");
                    warn!(path = %entry, %reason, "delete failed");
                    DeleteOutcome::Failed(reason)
                }
            }
        };

        summary.record_delete(entry.path(), &outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use super::*;

    /// Store whose removals succeed or fail on demand and are logged.
    #[derive(Default)]
    struct RecordingStore {
        fail_removals: bool,
        removed: Mutex<Vec<String>>,
    }

    impl IFileStore for RecordingStore {
        fn create_dir_all(&self, _path: &Path) -> anyhow::Result<()> {
            Ok(())
        }

        fn remove_file(&self, path: &Path) -> anyhow::Result<()> {
            if self.fail_removals {
                anyhow::bail!("permission denied");
            }
            self.removed
                .lock()
                .unwrap()
                .push(path.display().to_string());
            Ok(())
        }

        fn entry_exists(&self, _path: &Path) -> anyhow::Result<bool> {
            Ok(false)
        }

        fn copy_durable(&self, _from: &Path, _to: &Path) -> anyhow::Result<u64> {
            Ok(0)
        }
    }

    fn entry() -> FileEntry {
        FileEntry::from_path("tasks/a/tpl1234567890123.png").unwrap()
    }

    #[test]
    fn successful_delete_increments_count() {
        let store = Arc::new(RecordingStore::default());
        let pruner = Pruner::new(store.clone());
        let mut summary = RunSummary::new();

        let outcome = pruner.prune(&entry(), &mut summary);

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(summary.deleted_count, 1);
        assert!(summary.is_clean());
        assert_eq!(
            *store.removed.lock().unwrap(),
            vec!["tasks/a/tpl1234567890123.png".to_string()]
        );
    }

    #[test]
    fn failed_delete_is_recorded_not_counted() {
        let store = Arc::new(RecordingStore {
            fail_removals: true,
            ..Default::default()
        });
        let pruner = Pruner::new(store);
        let mut summary = RunSummary::new();

        let outcome = pruner.prune(&entry(), &mut summary);

        assert_eq!(outcome, DeleteOutcome::Failed("permission denied".into()));
        assert_eq!(summary.deleted_count, 0);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(
            summary.failures[0].path,
            Path::new("tasks/a/tpl1234567890123.png")
        );
        assert_eq!(summary.failures[0].reason, "permission denied");
    }

    #[test]
    fn dry_run_touches_nothing() {
        let store = Arc::new(RecordingStore::default());
        let pruner = Pruner::new(store.clone()).with_dry_run(true);
        let mut summary = RunSummary::new();

        let outcome = pruner.prune(&entry(), &mut summary);

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(summary.deleted_count, 1);
        assert!(store.removed.lock().unwrap().is_empty());
    }
}
