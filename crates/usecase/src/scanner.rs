// crates/usecase/src/scanner.rs
use std::{collections::BTreeSet, path::Path};

use log::debug;
use source_metrics_domain::{
    Category, DeclarationMatcher, ExclusionPolicy, LanguageProfile, Stats, count_significant, is_test_file,
    value_objects::ByteSize,
};
use source_metrics_ports::{SourceEntry, SourceTree};
use source_metrics_shared_kernel::Result;

/// Runs the per-query traversals over a [`SourceTree`].
///
/// Every method performs exactly one walk and shares nothing with other
/// calls. The first error aborts the walk; no partial result is returned.
pub struct TreeScanner<'a> {
    tree: &'a dyn SourceTree,
}

impl<'a> TreeScanner<'a> {
    pub fn new(tree: &'a dyn SourceTree) -> Self {
        Self { tree }
    }

    /// Accumulate lines, files and bytes for one category.
    pub fn scan(
        &self,
        root: &Path,
        profile: &LanguageProfile,
        exclusion: &ExclusionPolicy,
        category: Category,
    ) -> Result<Stats> {
        let mut stats = Stats::default();
        for entry in self.language_files(root, profile, exclusion)? {
            if !category.admits(is_test_file(&entry.relative, profile)) {
                continue;
            }
            let content = self.tree.read(&entry)?;
            let lines = count_significant(&String::from_utf8_lossy(&content), profile);
            stats.record(lines, ByteSize::new(entry.size));
        }
        debug!(
            "{} {} scan: {} files, {} lines, {} bytes",
            profile.key,
            category.label(),
            stats.files,
            stats.lines,
            stats.total_bytes
        );
        Ok(stats)
    }

    /// Count test and benchmark declarations across every file of the language.
    ///
    /// Detection is driven by content, so source files are read as well as
    /// test files. Profiles without declaration rules return zero without
    /// walking.
    pub fn count_test_functions(
        &self,
        root: &Path,
        profile: &LanguageProfile,
        exclusion: &ExclusionPolicy,
    ) -> Result<usize> {
        let matcher = DeclarationMatcher::for_profile(profile)?;
        if matcher.is_empty() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in self.language_files(root, profile, exclusion)? {
            let content = self.tree.read(&entry)?;
            count += matcher.count(&String::from_utf8_lossy(&content));
        }
        debug!("{} test declarations: {count}", profile.key);
        Ok(count)
    }

    /// Number of distinct directories, root included, holding at least one
    /// file of the language. Used as a package count.
    pub fn count_directories(
        &self,
        root: &Path,
        profile: &LanguageProfile,
        exclusion: &ExclusionPolicy,
    ) -> Result<usize> {
        let dirs: BTreeSet<_> = self
            .language_files(root, profile, exclusion)?
            .into_iter()
            .map(|entry| entry.relative.parent().map(Path::to_path_buf).unwrap_or_default())
            .collect();
        debug!("{} directories: {}", profile.key, dirs.len());
        Ok(dirs.len())
    }

    fn language_files(
        &self,
        root: &Path,
        profile: &LanguageProfile,
        exclusion: &ExclusionPolicy,
    ) -> Result<impl Iterator<Item = SourceEntry>> {
        let entries = self.tree.walk(root, exclusion)?;
        Ok(entries.into_iter().filter(move |e| profile.matches_extension(&e.relative)))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use source_metrics_domain::resolve;

    use super::*;
    use crate::test_support::MemoryTree;

    fn root() -> PathBuf {
        PathBuf::from("/repo")
    }

    fn scan(tree: &MemoryTree, key: &str, extra: &[&str], category: Category) -> Result<Stats> {
        let profile = resolve(key).unwrap();
        let exclusion = ExclusionPolicy::for_profile(profile, extra);
        TreeScanner::new(tree).scan(&root(), profile, &exclusion, category)
    }

    #[test]
    fn source_scan_counts_single_go_file() {
        let tree = MemoryTree::with(&[("main.go", "package main\nfunc main() {}\n")]);
        let stats = scan(&tree, "go", &[], Category::Source).unwrap();
        assert_eq!(stats.files, 1usize);
        assert_eq!(stats.lines, 2usize);
        assert_eq!(stats.total_bytes, ByteSize::new(28));
    }

    #[test]
    fn test_scan_skips_comment_lines() {
        let tree = MemoryTree::with(&[
            ("main.go", "package main\n"),
            ("main_test.go", "package main\n// comment\nfunc Test() {}\n"),
        ]);
        let stats = scan(&tree, "go", &[], Category::Test).unwrap();
        assert_eq!(stats.files, 1usize);
        assert_eq!(stats.lines, 2usize);
    }

    #[test]
    fn categories_never_overlap() {
        let tree = MemoryTree::with(&[
            ("a.go", "package a\n"),
            ("a_test.go", "package a\n"),
            ("b/b.go", "package b\n"),
        ]);
        let source = scan(&tree, "go", &[], Category::Source).unwrap();
        let test = scan(&tree, "go", &[], Category::Test).unwrap();
        assert_eq!(source.files, 2usize);
        assert_eq!(test.files, 1usize);
    }

    #[test]
    fn vendor_is_always_excluded() {
        let tree = MemoryTree::with(&[("vendor/dep/dep_test.go", "package dep\n"), ("x_test.go", "package x\n")]);
        for extra in [&[][..], &["vendor"][..]] {
            let test = scan(&tree, "go", extra, Category::Test).unwrap();
            let source = scan(&tree, "go", extra, Category::Source).unwrap();
            assert_eq!(test.files, 1usize);
            assert!(source.is_empty());
        }
    }

    #[test]
    fn hidden_and_extra_directories_are_pruned() {
        let tree = MemoryTree::with(&[
            (".github/tool.go", "package tool\n"),
            ("generated/api.go", "package api\n"),
            ("pkg/ok.go", "package ok\n"),
        ]);
        let stats = scan(&tree, "go", &["gen"], Category::Source).unwrap();
        assert_eq!(stats.files, 1usize);
    }

    #[test]
    fn yaml_lines_drop_hash_comments() {
        let tree = MemoryTree::with(&[("config.yaml", "name: test\n# comment\nversion: 1.0.0\n")]);
        let stats = scan(&tree, "yaml", &[], Category::Source).unwrap();
        assert_eq!(stats.lines, 2usize);
    }

    #[test]
    fn empty_tree_yields_zero_stats() {
        let tree = MemoryTree::default();
        let stats = scan(&tree, "js", &[], Category::Source).unwrap();
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.average_lines(), 0.0);
    }

    #[test]
    fn unreadable_file_fails_the_scan() {
        let tree = MemoryTree::with(&[("a.go", "package a\n")]).unreadable("b.go");
        let err = scan(&tree, "go", &[], Category::Source).unwrap_err();
        assert!(err.to_string().contains("b.go"));
    }

    #[test]
    fn unreadable_file_of_other_category_is_never_opened() {
        let tree = MemoryTree::with(&[("a.go", "package a\n")]).unreadable("b_test.go");
        assert!(scan(&tree, "go", &[], Category::Source).is_ok());
    }

    #[test]
    fn repeated_scans_are_identical() {
        let tree = MemoryTree::with(&[("a.go", "package a\n\nvar x = 1\n"), ("c/d.go", "package d\n")]);
        let first = scan(&tree, "go", &[], Category::Source).unwrap();
        let second = scan(&tree, "go", &[], Category::Source).unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.walks(), 2);
    }

    #[test]
    fn test_functions_are_counted_from_content() {
        let tree = MemoryTree::with(&[
            (
                "pkg/metrics_test.go",
                "func TestA(t *testing.T) {}\nfunc TestB(t *testing.T) {}\nfunc TestC(t *testing.T) {}\nfunc TestHelper(s string) {}\n",
            ),
            ("vendor/x/x_test.go", "func TestVendored(t *testing.T) {}\n"),
        ]);
        let go = resolve("go").unwrap();
        let exclusion = ExclusionPolicy::for_profile(go, &[] as &[&str]);
        let count = TreeScanner::new(&tree).count_test_functions(&root(), go, &exclusion).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn profiles_without_rules_skip_the_walk() {
        let tree = MemoryTree::with(&[("a.yaml", "test(\n")]);
        let yaml = resolve("yaml").unwrap();
        let exclusion = ExclusionPolicy::for_profile(yaml, &[] as &[&str]);
        let count = TreeScanner::new(&tree).count_test_functions(&root(), yaml, &exclusion).unwrap();
        assert_eq!(count, 0);
        assert_eq!(tree.walks(), 0);
    }

    #[test]
    fn directories_count_only_language_holders() {
        let tree = MemoryTree::with(&[
            ("main.go", ""),
            ("cmd/tool/main.go", ""),
            ("cmd/tool/main_test.go", ""),
            ("docs/readme.md", ""),
            ("node_modules/pkg/index.go", ""),
        ]);
        let go = resolve("go").unwrap();
        let exclusion = ExclusionPolicy::for_profile(go, &[] as &[&str]);
        let dirs = TreeScanner::new(&tree).count_directories(&root(), go, &exclusion).unwrap();
        assert_eq!(dirs, 2);
    }
}
