//! Run observer port
//!
//! The engine never prints. Front ends that want a line per event implement
//! [`IRunObserver`] and pass it to the run.

use std::path::Path;

/// Receives per-file events while a run is in progress.
///
/// Callbacks are invoked synchronously, in walk order, after the summary
/// has been updated for that file.
pub trait IRunObserver {
    /// An ephemeral preview was deleted
    fn on_deleted(&self, path: &Path);

    /// A candidate was promoted into the library
    fn on_copied(&self, from: &Path, to: &Path);

    /// A candidate was left alone because `to` already exists
    fn on_skipped(&self, _from: &Path, _to: &Path) {}

    /// Deleting or copying `path` failed; the run continues
    fn on_failed(&self, path: &Path, reason: &str);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IRunObserver for NoopObserver {
    fn on_deleted(&self, _path: &Path) {}
    fn on_copied(&self, _from: &Path, _to: &Path) {}
    fn on_failed(&self, _path: &Path, _reason: &str) {}
}
