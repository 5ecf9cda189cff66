// crates/domain/src/config/exclusion.rs
use std::path::{Component, Path};

use crate::language::LanguageProfile;

/// Directory names pruned for every language, on top of the profile's own list.
pub const ALWAYS_EXCLUDED: &[&str] = &["vendor", "node_modules", ".git"];

/// Decides which directories are pruned during a traversal.
///
/// A directory is pruned when its name is dot-prefixed, equals one of the
/// excluded names, contains one of the caller's extra fragments, or its
/// root-relative path (with `/` separators) equals an extra fragment. Once a
/// directory is pruned nothing below it is visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPolicy {
    names: Vec<String>,
    fragments: Vec<String>,
}

impl ExclusionPolicy {
    pub fn new<N, F>(names: N, extra: F) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let mut policy = Self::default();
        for name in names {
            let name = name.into();
            if !name.is_empty() && !policy.names.contains(&name) {
                policy.names.push(name);
            }
        }
        for fragment in extra {
            let fragment = fragment.into().trim().trim_matches('/').to_string();
            if !fragment.is_empty() && !policy.fragments.contains(&fragment) {
                policy.fragments.push(fragment);
            }
        }
        policy
    }

    /// Profile directories first, then [`ALWAYS_EXCLUDED`], then `extra`.
    pub fn for_profile<S: AsRef<str>>(profile: &LanguageProfile, extra: &[S]) -> Self {
        let names = profile.excluded_dirs.iter().chain(ALWAYS_EXCLUDED).copied();
        Self::new(names, extra.iter().map(|s| s.as_ref().to_string()))
    }

    pub fn excluded_names(&self) -> &[String] {
        &self.names
    }

    pub fn extra_fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Everything this policy excludes by name, as listed in reports.
    pub fn listed(&self) -> Vec<String> {
        let extra = self.fragments.iter().filter(|f| !self.names.contains(f));
        self.names.iter().chain(extra).cloned().collect()
    }

    /// `name` is the directory's own name, `relative` its path below the scan root.
    pub fn should_skip_dir(&self, name: &str, relative: &str) -> bool {
        if name.starts_with('.') {
            return true;
        }
        if self.names.iter().any(|n| n == name) {
            return true;
        }
        self.fragments.iter().any(|f| name.contains(f.as_str()) || relative == f)
    }

    /// Whether a root-relative file path sits below a pruned directory.
    pub fn prunes(&self, relative_file: &Path) -> bool {
        let Some(parent) = relative_file.parent() else {
            return false;
        };
        let mut relative = String::new();
        for component in parent.components() {
            let Component::Normal(segment) = component else {
                continue;
            };
            let segment = segment.to_string_lossy();
            if !relative.is_empty() {
                relative.push('/');
            }
            relative.push_str(&segment);
            if self.should_skip_dir(&segment, &relative) {
                return true;
            }
        }
        false
    }
}
