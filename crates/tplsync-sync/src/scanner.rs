//! Source tree walk
//!
//! [`PathScanner`] is an iterator over every non-directory entry under a
//! root, depth-first, siblings in file-name order. Symlinks are reported as
//! entries and never followed, not even when the root itself is one.
//!
//! The first read error ends the walk: it is yielded once as
//! `Err(SyncError::Traversal)` and the iterator returns `None` from then on.
//! The failing subtree is not skipped and nothing after it is visited.

use std::path::{Path, PathBuf};

use tplsync_core::domain::FileEntry;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::SyncError;

/// Lazy, single-pass walk of a source tree.
pub struct PathScanner {
    root: PathBuf,
    walker: walkdir::IntoIter,
    finished: bool,
}

impl PathScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .follow_root_links(false)
            .sort_by_file_name()
            .into_iter();
        Self {
            root,
            walker,
            finished: false,
        }
    }
}

impl Iterator for PathScanner {
    type Item = Result<FileEntry, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(next) = self.walker.next() else {
                self.finished = true;
                return None;
            };

            let entry = match next {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(root = %self.root.display(), error = %err, "walk aborted");
                    self.finished = true;
                    return Some(Err(SyncError::Traversal(err)));
                }
            };

            if entry.file_type().is_dir() {
                debug!(path = %entry.path().display(), "entering directory");
                continue;
            }

            match FileEntry::from_path(entry.into_path()) {
                Ok(file) => return Some(Ok(file)),
                Err(err) => {
                    warn!(%err, "skipping entry without a file name");
                    continue;
                }
            }
        }
    }
}

impl std::iter::FusedIterator for PathScanner {}
