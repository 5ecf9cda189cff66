// crates/domain/src/classify/test_files.rs
use std::path::{Component, Path};

use crate::language::{LanguageProfile, TestMarker};

/// Decide test-versus-source membership from the root-relative path alone.
///
/// Matching is case-sensitive. Suffixes apply to the base name, infixes to
/// the base name or any directory segment, and segment markers to whole
/// segments. A profile without markers
/// never reports a test file.
pub fn is_test_file(relative: &Path, profile: &LanguageProfile) -> bool {
    let base = relative.file_name().and_then(|n| n.to_str()).unwrap_or("");
    profile.test_markers.iter().any(|marker| match *marker {
        TestMarker::FileSuffix(suffix) => base.ends_with(suffix),
        TestMarker::FileInfix(infix) => segments(relative).any(|s| s.contains(infix)),
        TestMarker::DirSegment(segment) => has_segment(relative, segment),
    })
}

fn has_segment(path: &Path, segment: &str) -> bool {
    path.components().any(|c| matches!(c, Component::Normal(s) if s == segment))
}

fn segments(path: &Path) -> impl Iterator<Item = &str> {
    path.components().filter_map(|c| match c {
        Component::Normal(s) => s.to_str(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::resolve;

    #[test]
    fn go_uses_test_suffix() {
        let go = resolve("go").unwrap();
        assert!(is_test_file(Path::new("pkg/metrics_test.go"), go));
        assert!(!is_test_file(Path::new("pkg/metrics.go"), go));
        assert!(!is_test_file(Path::new("pkg/test/metrics.go"), go));
    }

    #[test]
    fn javascript_markers() {
        let js = resolve("js").unwrap();
        assert!(is_test_file(Path::new("src/app.test.ts"), js));
        assert!(is_test_file(Path::new("src/app.spec.jsx"), js));
        assert!(is_test_file(Path::new("src/__tests__/app.js"), js));
        assert!(!is_test_file(Path::new("src/__tests__helpers/app.js"), js));
        assert!(!is_test_file(Path::new("src/contest.js"), js));
    }

    #[test]
    fn infix_in_directory_segment_marks_test() {
        let js = resolve("js").unwrap();
        assert!(is_test_file(Path::new("fixtures.spec.d/a.js"), js));
        assert!(is_test_file(Path::new("e2e/login.test.flows/step.ts"), js));
        assert!(!is_test_file(Path::new("fixtures/spec/a.js"), js));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let js = resolve("js").unwrap();
        assert!(!is_test_file(Path::new("src/App.Test.js"), js));
    }

    #[test]
    fn yaml_never_has_tests() {
        let yaml = resolve("yaml").unwrap();
        assert!(!is_test_file(Path::new("ci/app.test.yaml"), yaml));
    }
}
