// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

use source_metrics_shared_kernel::{InfrastructureError, Result};

/// Reads files with consistent error mapping.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> Result<Vec<u8>> {
        let map = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };
        let mut file = File::open(path).map_err(map)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(map)?;
        Ok(buf)
    }

    /// Size in bytes, without following a trailing symlink.
    pub fn size(path: &Path) -> Result<u64> {
        fs::symlink_metadata(path)
            .map(|meta| meta.len())
            .map_err(|source| InfrastructureError::Metadata { path: path.to_path_buf(), source }.into())
    }
}
