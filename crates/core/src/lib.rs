// crates/core/src/lib.rs
//! # source_metrics_core
//!
//! Wires the use cases to the filesystem adapter and exposes the engine's
//! query surface. Every function resolves the language first, so an unknown
//! key fails before anything is read from disk.
//!
//! ```no_run
//! use source_metrics_core::{LocQuery, loc_report};
//!
//! let report = loc_report(&LocQuery::new(".").with_language("js"))?;
//! println!("{} lines", report.total_loc);
//! # Ok::<(), source_metrics_core::MetricsError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use source_metrics_infra::FsSourceTree;
use source_metrics_usecase::{LocReport, TreeScanner};

pub use source_metrics_domain::{
    analytics::human_size,
    Category, ExclusionPolicy, LanguageProfile, Report, Stats, count_significant, is_test_file, resolve,
    supported_keys,
};
pub use source_metrics_shared_kernel::{MetricsError, Result};
pub use source_metrics_usecase::LocQuery;

/// Full report for the query's root and language.
pub fn loc_report(query: &LocQuery) -> Result<Report> {
    LocReport::new(&FsSourceTree).run(query)
}

/// Stats for one category of `language` files below `root`.
pub fn scan<S: AsRef<str>>(root: &Path, language: &str, extra_excludes: &[S], category: Category) -> Result<Stats> {
    let (profile, exclusion) = prepare(language, extra_excludes)?;
    TreeScanner::new(&FsSourceTree).scan(root, profile, &exclusion, category)
}

/// Number of test and benchmark declarations in `language` files below `root`.
pub fn count_test_functions<S: AsRef<str>>(root: &Path, language: &str, extra_excludes: &[S]) -> Result<usize> {
    let (profile, exclusion) = prepare(language, extra_excludes)?;
    TreeScanner::new(&FsSourceTree).count_test_functions(root, profile, &exclusion)
}

/// Number of distinct directories holding at least one `language` file.
pub fn count_directories<S: AsRef<str>>(root: &Path, language: &str, extra_excludes: &[S]) -> Result<usize> {
    let (profile, exclusion) = prepare(language, extra_excludes)?;
    TreeScanner::new(&FsSourceTree).count_directories(root, profile, &exclusion)
}

fn prepare<S: AsRef<str>>(language: &str, extra_excludes: &[S]) -> Result<(&'static LanguageProfile, ExclusionPolicy)> {
    let profile = resolve(language)?;
    Ok((profile, ExclusionPolicy::for_profile(profile, extra_excludes)))
}
