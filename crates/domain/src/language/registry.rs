// crates/domain/src/language/registry.rs
use source_metrics_shared_kernel::{DomainError, DomainResult};

use super::profile::{DeclarationRule, LanguageProfile, TestMarker};

/// Key used when the caller supplies none.
pub const DEFAULT_LANGUAGE: &str = "go";

// Remainder after `func Test` / `func Benchmark`: rest of the name, then a
// single parameter, named or not, typed with the testing context.
const GO_TEST_SIGNATURE: &str = r"^\w*\s*\(\s*(?:\w+\s+)?\*testing\.T\s*\)";
const GO_BENCHMARK_SIGNATURE: &str = r"^\w*\s*\(\s*(?:\w+\s+)?\*testing\.B\s*\)";

const GO: LanguageProfile = LanguageProfile {
    key: "go",
    name: "Go",
    source_extensions: &[".go"],
    test_markers: &[TestMarker::FileSuffix("_test.go")],
    excluded_dirs: &["vendor", "third_party"],
    comment_prefixes: &["//"],
    declaration_rules: &[
        DeclarationRule::with_signature("func Test", GO_TEST_SIGNATURE),
        DeclarationRule::with_signature("func Benchmark", GO_BENCHMARK_SIGNATURE),
    ],
};

// `describe(` is deliberately absent: grouping blocks are never counted,
// only the registrations nested inside them.
const JAVASCRIPT: LanguageProfile = LanguageProfile {
    key: "js",
    name: "JavaScript",
    source_extensions: &[".js", ".ts", ".jsx", ".tsx"],
    test_markers: &[
        TestMarker::FileInfix(".test."),
        TestMarker::FileInfix(".spec."),
        TestMarker::DirSegment("__tests__"),
    ],
    excluded_dirs: &["node_modules", "dist", "build", ".next", "coverage"],
    comment_prefixes: &["//"],
    declaration_rules: &[
        DeclarationRule::prefix("test("),
        DeclarationRule::prefix("test.only("),
        DeclarationRule::prefix("test.skip("),
        DeclarationRule::prefix("test.todo("),
        DeclarationRule::prefix("test.concurrent("),
        DeclarationRule::prefix("it("),
        DeclarationRule::prefix("it.only("),
        DeclarationRule::prefix("it.skip("),
        DeclarationRule::prefix("it.todo("),
        DeclarationRule::prefix("it.concurrent("),
    ],
};

const YAML: LanguageProfile = LanguageProfile {
    key: "yaml",
    name: "YAML",
    source_extensions: &[".yaml", ".yml"],
    test_markers: &[],
    excluded_dirs: &["node_modules", "vendor"],
    comment_prefixes: &["#"],
    declaration_rules: &[],
};

static PROFILES: [LanguageProfile; 3] = [GO, JAVASCRIPT, YAML];

/// Every registered profile, in registry order.
pub fn profiles() -> &'static [LanguageProfile] {
    &PROFILES
}

pub fn supported_keys() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.key)
}

/// Look up a profile by key.
///
/// The key is trimmed and compared case-insensitively; an empty key selects
/// [`DEFAULT_LANGUAGE`].
///
/// # Errors
///
/// [`DomainError::UnsupportedLanguage`] naming the key when nothing matches.
pub fn resolve(key: &str) -> DomainResult<&'static LanguageProfile> {
    let key = key.trim();
    let key = if key.is_empty() { DEFAULT_LANGUAGE } else { key };

    PROFILES.iter().find(|p| p.key.eq_ignore_ascii_case(key)).ok_or_else(|| {
        DomainError::UnsupportedLanguage {
            key: key.to_ascii_lowercase(),
            supported: supported_keys().collect::<Vec<_>>().join(", "),
        }
    })
}
