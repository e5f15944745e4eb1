//! Local filesystem adapter (secondary/driven adapter)
//!
//! Implements [`IFileStore`] with blocking `std::fs` calls.
//!
//! ## Design Decisions
//!
//! - **No overwrite**: the destination of a copy is opened with
//!   `create_new`, so even if another process creates the same name between
//!   the existence check and the copy, the existing file is left intact and
//!   the copy fails instead.
//! - **Durability**: a copy is only reported complete after `sync_all`.
//! - **Existence**: checked with `symlink_metadata`, so a dangling symlink in
//!   the library still counts as an existing entry.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::Path;

use anyhow::Context;
use tplsync_core::ports::IFileStore;
use tracing::{debug, instrument};

/// Permission bits for a newly created library directory.
#[cfg(unix)]
const TARGET_DIR_MODE: u32 = 0o755;

/// Adapter that bridges the [`IFileStore`] port to the real filesystem.
///
/// Zero-sized: every operation takes its context from its path arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IFileStore for LocalFileStore {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn create_dir_all(&self, path: &Path) -> anyhow::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(TARGET_DIR_MODE);
        }
        // an existing directory is success; an existing file is an error
        builder.create(path)?;
        debug!("directory ready");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn remove_file(&self, path: &Path) -> anyhow::Result<()> {
        fs::remove_file(path)?;
        debug!("file removed");
        Ok(())
    }

    fn entry_exists(&self, path: &Path) -> anyhow::Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self), fields(from = %from.display(), to = %to.display()))]
    fn copy_durable(&self, from: &Path, to: &Path) -> anyhow::Result<u64> {
        let mut source =
            File::open(from).with_context(|| format!("failed to open {}", from.display()))?;
        let mut destination = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(to)
            .with_context(|| format!("failed to create {}", to.display()))?;

        let bytes = io::copy(&mut source, &mut destination)
            .with_context(|| format!("failed to copy into {}", to.display()))?;
        destination
            .sync_all()
            .with_context(|| format!("failed to flush {}", to.display()))?;

        debug!(bytes, "copy complete");
        Ok(bytes)
    }
}
