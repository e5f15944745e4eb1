//! Domain entities and business logic
//!
//! This module contains the core domain types for tplsync:
//! - File entries produced by the source tree walk
//! - Filename classification (ignored, ephemeral preview, promotion candidate)
//! - Per-file outcomes of pruning and promotion
//! - The run summary accumulated across a single reconciliation
//! - Domain-specific error types

pub mod classification;
pub mod entry;
pub mod errors;
pub mod outcome;
pub mod summary;

// Re-export commonly used types
pub use classification::{Classification, Classifier, EPHEMERAL_PATTERN};
pub use entry::FileEntry;
pub use errors::DomainError;
pub use outcome::{CopyOutcome, DeleteOutcome};
pub use summary::{Failure, RunSummary};
