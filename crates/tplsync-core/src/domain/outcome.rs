//! Per-file outcomes of pruning and promotion

use std::fmt::{self, Display, Formatter};

/// Result of promoting a single candidate into the template library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Content was copied and flushed to the destination
    Copied,
    /// An entry with the same name already exists in the library
    SkippedExisting,
    /// The existence check or the copy failed
    Failed(String),
}

impl Display for CopyOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CopyOutcome::Copied => write!(f, "copied"),
            CopyOutcome::SkippedExisting => write!(f, "skipped (already exists)"),
            CopyOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Result of deleting a single ephemeral preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(String),
}

impl Display for DeleteOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted => write!(f, "deleted"),
            DeleteOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(CopyOutcome::SkippedExisting.to_string(), "skipped (already exists)");
        assert_eq!(
            DeleteOutcome::Failed("permission denied".into()).to_string(),
            "failed: permission denied"
        );
    }
}
