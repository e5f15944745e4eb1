//! tplsync Core - Domain logic and configuration
//!
//! This crate contains the pieces of tplsync that never touch the disk:
//! - **Domain types** - `FileEntry`, `Classification`, `Classifier`, outcomes, `RunSummary`
//! - **Port definitions** - Traits the sync crate drives: `IFileStore`, `IRunObserver`
//! - **Configuration** - YAML-backed `Config` with defaults, validation and a builder
//!
//! # Architecture
//!
//! The domain module is pure: classification works on names alone and the
//! run summary is a plain value. Ports define the filesystem and event
//! interfaces that the sync crate and the CLI implement.

pub mod config;
pub mod domain;
pub mod ports;
