// crates/usecase/src/test_support.rs
use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use source_metrics_domain::ExclusionPolicy;
use source_metrics_ports::{SourceEntry, SourceTree};
use source_metrics_shared_kernel::{InfrastructureError, Result};

/// In-memory project tree. Paths are root-relative with `/` separators.
#[derive(Default)]
pub struct MemoryTree {
    files: BTreeMap<PathBuf, Option<Vec<u8>>>,
    walks: AtomicUsize,
}

impl MemoryTree {
    pub fn with(files: &[(&str, &str)]) -> Self {
        let mut tree = Self::default();
        for (path, content) in files {
            tree.files.insert(PathBuf::from(path), Some(content.as_bytes().to_vec()));
        }
        tree
    }

    /// Registers a file that shows up in walks but fails to read.
    pub fn unreadable(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), None);
        self
    }

    pub fn walks(&self) -> usize {
        self.walks.load(Ordering::SeqCst)
    }
}

impl SourceTree for MemoryTree {
    fn walk(&self, root: &Path, exclusion: &ExclusionPolicy) -> Result<Vec<SourceEntry>> {
        self.walks.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .files
            .iter()
            .filter(|(relative, _)| !exclusion.prunes(relative))
            .map(|(relative, content)| SourceEntry {
                path: root.join(relative),
                relative: relative.clone(),
                size: content.as_ref().map_or(0, |c| c.len() as u64),
            })
            .collect())
    }

    fn read(&self, entry: &SourceEntry) -> Result<Vec<u8>> {
        match self.files.get(&entry.relative) {
            Some(Some(content)) => Ok(content.clone()),
            _ => Err(InfrastructureError::FileRead {
                path: entry.path.clone(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            }
            .into()),
        }
    }
}
