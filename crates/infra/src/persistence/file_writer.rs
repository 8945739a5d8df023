// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use plist_version_shared_kernel::{InfraResult, InfrastructureError};
use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Replace the contents of `path` with `data`.
    ///
    /// Symlinks are followed, so the file they point at is updated and the link
    /// itself survives. A regular file is replaced atomically through a temp
    /// file in its own directory, keeping its permissions. A file with more
    /// than one hard link is rewritten in place so every link sees the new
    /// contents. On failure the target is left untouched except in the
    /// in-place case.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        Self::write_replace(path, data).map_err(|source| InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_replace(path: &Path, data: &[u8]) -> io::Result<()> {
        let target = resolve_target(path);
        let existing = fs::metadata(&target).ok();

        if existing.as_ref().is_some_and(has_other_links) {
            return Self::write_in_place(&target, data);
        }

        let parent = match target.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        if let Some(meta) = &existing {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        // Best-effort durability; a failed fsync does not abort the replace.
        let _ = tmp.as_file().sync_all();

        tmp.persist(&target).map_err(|e| e.error)?;
        tracing::trace!(path = %target.display(), bytes = data.len(), "replaced file");

        #[cfg(unix)]
        {
            if let Ok(dir) = fs::File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_in_place(target: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = fs::OpenOptions::new().write(true).truncate(true).open(target)?;
        file.write_all(data)?;
        let _ = file.sync_all();
        tracing::trace!(path = %target.display(), bytes = data.len(), "rewrote hard-linked file in place");
        Ok(())
    }
}

/// Final path behind any symlinks. Paths that do not resolve are used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(unix)]
fn has_other_links(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_meta: &fs::Metadata) -> bool {
    false
}
