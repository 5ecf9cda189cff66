// tests/common/mod.rs
//! Shared fixtures for the binary's integration tests.

use std::fs;

use tempfile::TempDir;

/// A throwaway project tree populated from `(relative path, contents)` pairs.
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (rel, contents) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
    dir
}
