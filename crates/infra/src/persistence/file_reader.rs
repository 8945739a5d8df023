// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use plist_version_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    ///
    /// A missing file is reported as [`InfrastructureError::NotFound`],
    /// every other failure as [`InfrastructureError::FileRead`].
    pub fn read_to_end(path: &Path) -> InfraResult<Vec<u8>> {
        let read = || -> io::Result<Vec<u8>> {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(buf)
        };
        read().map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => InfrastructureError::NotFound { path: path.to_path_buf(), source },
            _ => InfrastructureError::FileRead { path: path.to_path_buf(), source },
        })
    }
}
