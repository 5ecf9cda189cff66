// crates/usecase/src/orchestrator.rs
use log::debug;
use source_metrics_domain::{AggregateInput, Aggregator, Category, ExclusionPolicy, Report, Stats, resolve};
use source_metrics_ports::SourceTree;
use source_metrics_shared_kernel::{ErrorContext, Result};

use crate::{dto::LocQuery, scanner::TreeScanner};

/// Builds the full lines-of-code report for one query.
pub struct LocReport<'a> {
    tree: &'a dyn SourceTree,
}

impl<'a> LocReport<'a> {
    pub fn new(tree: &'a dyn SourceTree) -> Self {
        Self { tree }
    }

    /// The language key is validated before any traversal starts.
    pub fn run(&self, query: &LocQuery) -> Result<Report> {
        let profile = resolve(query.language_key())?;
        let exclusion = ExclusionPolicy::for_profile(profile, &query.extra_excludes);
        let root = query.root.as_path();
        let scanner = TreeScanner::new(self.tree);
        debug!("{} report for {}", profile.key, root.display());

        let source = scanner
            .scan(root, profile, &exclusion, Category::Source)
            .with_context(|| format!("Failed to scan {} source files", profile.name))?;
        let test = if profile.has_test_files() {
            scanner
                .scan(root, profile, &exclusion, Category::Test)
                .with_context(|| format!("Failed to scan {} test files", profile.name))?
        } else {
            Stats::default()
        };
        let package_count = scanner
            .count_directories(root, profile, &exclusion)
            .context("Failed to count directories")?;
        let test_function_count = scanner
            .count_test_functions(root, profile, &exclusion)
            .context("Failed to count test functions")?;

        Ok(Aggregator::build(AggregateInput {
            profile,
            source,
            test,
            excluded_dirs: exclusion.listed(),
            test_function_count,
            package_count,
        }))
    }
}
