//! Console observer - one line per pruned, promoted or failed file

use std::path::Path;

use tplsync_core::ports::IRunObserver;
use tracing::debug;

use crate::output::OutputFormatter;

/// Prints run events through the active [`OutputFormatter`].
pub struct ConsoleObserver<'a> {
    formatter: &'a dyn OutputFormatter,
    dry_run: bool,
}

impl<'a> ConsoleObserver<'a> {
    pub fn new(formatter: &'a dyn OutputFormatter, dry_run: bool) -> Self {
        Self { formatter, dry_run }
    }
}

impl IRunObserver for ConsoleObserver<'_> {
    fn on_deleted(&self, path: &Path) {
        let verb = if self.dry_run { "Would delete" } else { "Deleted" };
        self.formatter
            .info(&format!("{verb}: {}", path.display()));
    }

    fn on_copied(&self, from: &Path, to: &Path) {
        let verb = if self.dry_run { "Would copy" } else { "Copied" };
        self.formatter
            .info(&format!("{verb}: {} to {}", from.display(), to.display()));
    }

    fn on_skipped(&self, from: &Path, to: &Path) {
        debug!(from = %from.display(), to = %to.display(), "already in library");
    }

    fn on_failed(&self, path: &Path, reason: &str) {
        self.formatter
            .warn(&format!("Failed to process {}: {reason}", path.display()));
    }
}
