//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: pruned tree traversal and file content access
//!
//! The use-case layer only ever sees these traits, so it can be exercised
//! against an in-memory tree.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

pub use filesystem::{SourceEntry, SourceTree};
