//! Filesystem port (driven/secondary port)
//!
//! The reconciler only ever needs four filesystem operations. Keeping them
//! behind a trait lets tests inject failures (a delete that is denied, a copy
//! that runs out of space) without depending on the permissions of the
//! machine running the tests.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because filesystem errors are adapter-specific;
//!   callers render the chain with `{:#}` into the run summary.
//! - Operations are synchronous: a run processes one file at a time and
//!   every call blocks until the filesystem answers.

use std::path::Path;

/// Filesystem operations needed by a reconciliation run.
pub trait IFileStore: Send + Sync {
    /// Create `path` and any missing parents. Succeeds if it already exists
    /// as a directory.
    fn create_dir_all(&self, path: &Path) -> anyhow::Result<()>;

    /// Remove a single file in place.
    fn remove_file(&self, path: &Path) -> anyhow::Result<()>;

    /// Whether any entry (file, directory, symlink, even a dangling one)
    /// exists at `path`. A "not found" answer is `Ok(false)`; any other
    /// failure to inspect the path is an error.
    fn entry_exists(&self, path: &Path) -> anyhow::Result<bool>;

    /// Copy the full content of `from` into a new file at `to` and flush it
    /// to storage before returning. Must fail rather than replace an entry
    /// that already exists at `to`. Returns the number of bytes copied.
    fn copy_durable(&self, from: &Path, to: &Path) -> anyhow::Result<u64>;
}
