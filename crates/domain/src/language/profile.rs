// crates/domain/src/language/profile.rs
use std::path::Path;

/// How a file is recognised as belonging to the test category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMarker {
    /// Base name ends with the literal, e.g. `_test.go`.
    FileSuffix(&'static str),
    /// Base name contains the literal, e.g. `.spec.`.
    FileInfix(&'static str),
    /// Some path segment equals the literal, e.g. `__tests__`.
    DirSegment(&'static str),
}

/// One row of a profile's test-declaration table.
///
/// A left-trimmed line is a declaration when it starts with `prefix` and,
/// if `signature` is set, the rest of the line after the prefix matches that
/// anchored regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationRule {
    pub prefix: &'static str,
    pub signature: Option<&'static str>,
}

impl DeclarationRule {
    pub const fn prefix(prefix: &'static str) -> Self {
        Self { prefix, signature: None }
    }

    pub const fn with_signature(prefix: &'static str, signature: &'static str) -> Self {
        Self { prefix, signature: Some(signature) }
    }
}

/// Scanning rules for one language. Profiles are `'static` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub source_extensions: &'static [&'static str],
    pub test_markers: &'static [TestMarker],
    pub excluded_dirs: &'static [&'static str],
    pub comment_prefixes: &'static [&'static str],
    pub declaration_rules: &'static [DeclarationRule],
}

impl LanguageProfile {
    /// Languages without test markers have no test category at all.
    pub const fn has_test_files(&self) -> bool {
        !self.test_markers.is_empty()
    }

    pub const fn has_declaration_rules(&self) -> bool {
        !self.declaration_rules.is_empty()
    }

    /// Suffix match of the file name against the source extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.source_extensions.iter().any(|ext| name.ends_with(ext))
    }
}
