// crates/domain/src/classify/lines.rs
//! Significant-line counting.
//!
//! Only blank lines and full-line comments are discarded. Block comments are
//! not tracked: a line inside `/* ... */` that does not itself start with a
//! line-comment prefix still counts, and a code line with a trailing comment
//! counts once.

use crate::{language::LanguageProfile, value_objects::LineCount};

/// True when the trimmed line is non-empty and not a full-line comment.
pub fn is_significant(line: &str, comment_prefixes: &[&str]) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !comment_prefixes.iter().any(|p| trimmed.starts_with(p))
}

/// Count the significant physical lines of `content` under `profile`.
pub fn count_significant(content: &str, profile: &LanguageProfile) -> LineCount {
    content.lines().filter(|line| is_significant(line, profile.comment_prefixes)).count().into()
}
