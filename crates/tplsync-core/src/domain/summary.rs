//! Run summary
//!
//! [`RunSummary`] is the only state that lives for a whole reconciliation.
//! It is created by the run driver, threaded by `&mut` into the pruner and
//! the sync engine, and handed to the reporter once the walk ends.

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outcome::{CopyOutcome, DeleteOutcome};

/// A non-fatal per-file failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Source path of the file that could not be deleted or copied
    pub path: PathBuf,
    /// Rendered error chain
    pub reason: String,
}

/// Totals and failures accumulated across a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ephemeral previews removed from the source tree
    pub deleted_count: u32,
    /// Candidates promoted into the template library
    pub copied_count: u32,
    /// Candidates skipped because the library already has that name
    pub skipped_count: u32,
    /// Non-PNG files seen and left alone
    pub ignored_count: u32,
    /// Per-file failures, in processing order
    pub failures: Vec<Failure>,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration in milliseconds, set by [`RunSummary::finish`]
    pub duration_ms: u64,
}

impl RunSummary {
    /// Start an empty summary stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deleted_count: 0,
            copied_count: 0,
            skipped_count: 0,
            ignored_count: 0,
            failures: Vec::new(),
            started_at: Utc::now(),
            duration_ms: 0,
        }
    }

    /// Fold a deletion outcome into the totals.
    pub fn record_delete(&mut self, path: &Path, outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted => self.deleted_count += 1,
            DeleteOutcome::Failed(reason) => self.record_failure(path, reason.clone()),
        }
    }

    /// Fold a promotion outcome into the totals.
    pub fn record_copy(&mut self, path: &Path, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::Copied => self.copied_count += 1,
            CopyOutcome::SkippedExisting => self.skipped_count += 1,
            CopyOutcome::Failed(reason) => self.record_failure(path, reason.clone()),
        }
    }

    pub fn record_ignored(&mut self) {
        self.ignored_count += 1;
    }

    pub fn record_failure(&mut self, path: &Path, reason: impl Into<String>) {
        self.failures.push(Failure {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    /// Stamp the elapsed time. Safe to call more than once; the last call wins.
    pub fn finish(&mut self) {
        let elapsed = Utc::now() - self.started_at;
        self.duration_ms = elapsed.num_milliseconds().max(0) as u64;
    }

    /// True when no per-file failure was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The two-count totals line: `<deleted> files deleted, <copied> files copied`.
    #[must_use]
    pub fn totals_line(&self) -> String {
        format!(
            "{} files deleted, {} files copied",
            self.deleted_count, self.copied_count
        )
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.totals_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_summary_is_empty() {
        let summary = RunSummary::new();
        assert_eq!(summary.deleted_count, 0);
        assert_eq!(summary.copied_count, 0);
        assert_eq!(summary.skipped_count, 0);
        assert_eq!(summary.ignored_count, 0);
        assert!(summary.is_clean());
        assert_eq!(summary.to_string(), "0 files deleted, 0 files copied");
    }

    #[test]
    fn records_outcomes() {
        let mut summary = RunSummary::new();
        let path = Path::new("tasks/a/tpl1234567890123.png");

        summary.record_delete(path, &DeleteOutcome::Deleted);
        summary.record_copy(Path::new("tasks/a/logo.png"), &CopyOutcome::Copied);
        summary.record_copy(Path::new("tasks/b/logo.png"), &CopyOutcome::SkippedExisting);
        summary.record_ignored();

        assert_eq!(summary.deleted_count, 1);
        assert_eq!(summary.copied_count, 1);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.ignored_count, 1);
        assert!(summary.is_clean());
        assert_eq!(summary.totals_line(), "1 files deleted, 1 files copied");
    }

    #[test]
    fn failures_keep_processing_order() {
        let mut summary = RunSummary::new();
        summary.record_delete(
            Path::new("tasks/x.png"),
            &DeleteOutcome::Failed("permission denied".into()),
        );
        summary.record_copy(
            Path::new("tasks/y.png"),
            &CopyOutcome::Failed("disk full".into()),
        );

        assert_eq!(summary.deleted_count, 0);
        assert_eq!(summary.copied_count, 0);
        assert!(!summary.is_clean());
        assert_eq!(
            summary.failures,
            vec![
                Failure {
                    path: PathBuf::from("tasks/x.png"),
                    reason: "permission denied".into(),
                },
                Failure {
                    path: PathBuf::from("tasks/y.png"),
                    reason: "disk full".into(),
                },
            ]
        );
    }

    #[test]
    fn finish_sets_non_negative_duration() {
        let mut summary = RunSummary::new();
        summary.finish();
        assert!(summary.duration_ms < 60_000);
    }

    #[test]
    fn serializes_to_json() {
        let mut summary = RunSummary::new();
        summary.record_failure(Path::new("tasks/z.png"), "boom");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["deleted_count"], 0);
        assert_eq!(json["failures"][0]["path"], "tasks/z.png");
        assert_eq!(json["failures"][0]["reason"], "boom");
    }
}
