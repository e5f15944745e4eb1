//! Port definitions (hexagonal architecture)
//!
//! Ports are the traits the reconciliation engine is written against:
//! - [`file_store`] - Filesystem operations used for bootstrap, pruning and promotion
//! - [`run_observer`] - Per-file event callbacks for the console layer

pub mod file_store;
pub mod run_observer;

pub use file_store::IFileStore;
pub use run_observer::{IRunObserver, NoopObserver};
