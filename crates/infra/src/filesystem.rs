// crates/infra/src/filesystem.rs
use std::path::{Component, Path};

use ignore::{DirEntry, WalkBuilder};
use log::trace;
use source_metrics_domain::ExclusionPolicy;
use source_metrics_ports::{SourceEntry, SourceTree};
use source_metrics_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the [`SourceTree`] port.
///
/// The walker's own hidden/gitignore filters are disabled: which directories
/// are skipped is decided solely by the [`ExclusionPolicy`]. Symlinks are not
/// followed and only regular files are reported. Entries come back sorted by
/// file name within each directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceTree;

impl FsSourceTree {
    pub fn new() -> Self {
        Self
    }
}

impl SourceTree for FsSourceTree {
    fn walk(&self, root: &Path, exclusion: &ExclusionPolicy) -> Result<Vec<SourceEntry>> {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false);
        builder.follow_links(false);
        builder.sort_by_file_name(|a, b| a.cmp(b));

        let prune_root = root.to_path_buf();
        let policy = exclusion.clone();
        builder.filter_entry(move |entry| !is_pruned(entry, &prune_root, &policy));

        let mut entries = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|err| InfrastructureError::Walk {
                path: root.to_path_buf(),
                details: err.to_string(),
            })?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.into_path();
            let relative = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| path.clone());
            let size = FileReader::size(&path)?;
            entries.push(SourceEntry { path, relative, size });
        }
        Ok(entries)
    }

    fn read(&self, entry: &SourceEntry) -> Result<Vec<u8>> {
        FileReader::read_to_end(&entry.path)
    }
}

fn is_pruned(entry: &DirEntry, root: &Path, policy: &ExclusionPolicy) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let relative = slash_relative(entry.path(), root);
    let pruned = policy.should_skip_dir(&name, &relative);
    if pruned {
        trace!("pruned {relative}");
    }
    pruned
}

fn slash_relative(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&segment.to_string_lossy());
        }
    }
    out
}
