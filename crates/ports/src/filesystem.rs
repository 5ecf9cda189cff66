// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use source_metrics_domain::ExclusionPolicy;
use source_metrics_shared_kernel::Result;

/// A regular file discovered below the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path usable to open the file.
    pub path: PathBuf,
    /// Path relative to the scan root; classification looks only at this.
    pub relative: PathBuf,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
}

/// Port for reading a project tree.
pub trait SourceTree: Send + Sync {
    /// Traverse `root` once, pruning every directory `exclusion` rejects, and
    /// return the regular files found. Any failure aborts the traversal.
    fn walk(&self, root: &Path, exclusion: &ExclusionPolicy) -> Result<Vec<SourceEntry>>;

    /// Raw content of a file returned by [`SourceTree::walk`].
    fn read(&self, entry: &SourceEntry) -> Result<Vec<u8>>;
}
