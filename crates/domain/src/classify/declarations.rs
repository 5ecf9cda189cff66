// crates/domain/src/classify/declarations.rs
use regex::Regex;
use source_metrics_shared_kernel::{DomainError, DomainResult};

use crate::language::{DeclarationRule, LanguageProfile};

struct CompiledRule {
    prefix: &'static str,
    signature: Option<Regex>,
}

impl CompiledRule {
    fn compile(rule: &DeclarationRule) -> DomainResult<Self> {
        let signature = rule
            .signature
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| DomainError::InvalidPattern {
                    pattern: pattern.to_string(),
                    details: err.to_string(),
                })
            })
            .transpose()?;
        Ok(Self { prefix: rule.prefix, signature })
    }

    fn matches(&self, line: &str) -> bool {
        let Some(rest) = line.strip_prefix(self.prefix) else {
            return false;
        };
        self.signature.as_ref().is_none_or(|re| re.is_match(rest))
    }
}

/// A profile's declaration table, compiled once per query.
///
/// Rules are tried top to bottom and the first match wins, so a line is
/// counted at most once.
pub struct DeclarationMatcher {
    rules: Vec<CompiledRule>,
}

impl DeclarationMatcher {
    /// # Errors
    ///
    /// [`DomainError::InvalidPattern`] if a signature pattern does not compile.
    pub fn for_profile(profile: &LanguageProfile) -> DomainResult<Self> {
        let rules = profile.declaration_rules.iter().map(CompiledRule::compile).collect::<DomainResult<_>>()?;
        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the line, after leading whitespace is stripped, declares a test.
    pub fn matches_line(&self, line: &str) -> bool {
        let line = line.trim_start();
        self.rules.iter().any(|rule| rule.matches(line))
    }

    /// Number of declaration lines in `content`.
    pub fn count(&self, content: &str) -> usize {
        if self.is_empty() {
            return 0;
        }
        content.lines().filter(|line| self.matches_line(line)).count()
    }
}

impl std::fmt::Debug for DeclarationMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rules.iter().map(|r| r.prefix)).finish()
    }
}
