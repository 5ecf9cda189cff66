// crates/usecase/src/dto.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Parameters of one lines-of-code query.
///
/// Every field has a default, so a surrounding tool can embed this in its own
/// configuration and supply only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocQuery {
    pub root: PathBuf,
    /// Registry key; `None` or empty selects the default language.
    pub language: Option<String>,
    /// Directory-name fragments pruned on top of the built-in exclusions.
    pub extra_excludes: Vec<String>,
}

impl Default for LocQuery {
    fn default() -> Self {
        Self { root: PathBuf::from("."), language: None, extra_excludes: Vec::new() }
    }
}

impl LocQuery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_language(mut self, key: impl Into<String>) -> Self {
        self.language = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_excludes<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_excludes.extend(fragments.into_iter().map(Into::into));
        self
    }

    pub fn language_key(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }
}
