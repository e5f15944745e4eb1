//! tplsync Sync - Prune-and-promote reconciliation engine
//!
//! Provides:
//! - Depth-first walk of the task tree
//! - Deletion of generated preview images in place
//! - One-way, never-overwriting promotion of templates into a flat library
//!
//! ## Modules
//!
//! - [`scanner`] - Lazy walk yielding file entries and a terminal traversal error
//! - [`filesystem`] - `std::fs` adapter for the [`IFileStore`] port
//! - [`pruner`] - Deletes ephemeral previews
//! - [`engine`] - Promotes candidates into the library
//! - [`reconciler`] - Bootstraps the library and drives a whole run
//!
//! [`IFileStore`]: tplsync_core::ports::IFileStore

pub mod engine;
pub mod filesystem;
pub mod pruner;
pub mod reconciler;
pub mod scanner;

use std::path::PathBuf;

use thiserror::Error;

pub use engine::SyncEngine;
pub use filesystem::LocalFileStore;
pub use pruner::Pruner;
pub use reconciler::{Reconciler, RunOutcome};
pub use scanner::PathScanner;

/// Errors that end a run early.
///
/// Per-file delete and copy failures are never raised as errors; they are
/// recorded in the run summary and the run continues.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The template library directory could not be created
    #[error("Failed to create target directory {}: {reason}", .path.display())]
    Bootstrap {
        /// Library directory that was being created
        path: PathBuf,
        /// Rendered error chain
        reason: String,
    },

    /// Reading the source tree failed; the walk stops here
    #[error("Error traversing directory: {0}")]
    Traversal(#[from] walkdir::Error),
}

impl SyncError {
    /// Short machine-friendly name of the failure class.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Bootstrap { .. } => "bootstrap",
            SyncError::Traversal(_) => "traversal",
        }
    }
}
