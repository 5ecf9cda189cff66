//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`scanner`]: the Tree Scanner plus the test-function and directory counters
//! - [`orchestrator`]: the lines-of-code report query
//! - [`dto`]: query parameters handed in by callers
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_support;

pub use dto::LocQuery;
pub use orchestrator::LocReport;
pub use scanner::TreeScanner;
