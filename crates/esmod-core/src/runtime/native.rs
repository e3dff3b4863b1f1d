//! Native filesystem runtime

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::warn;

use super::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

/// [`Runtime`] over `std::fs`
///
/// Writes go to a temporary sibling that is renamed over the target, so a
/// failed write leaves the original file untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRuntime;

impl NativeRuntime {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> RuntimeError {
    if err.kind() == std::io::ErrorKind::NotFound {
        RuntimeError::FileNotFound(path.to_path_buf())
    } else {
        RuntimeError::Io(format!("Failed to {action} {}: {err}", path.display()))
    }
}

impl Runtime for NativeRuntime {
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| io_error("read", path, e))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| io_error("stage", path, e))?;
        temp.write_all(content)
            .and_then(|()| temp.flush())
            .map_err(|e| io_error("write", path, e))?;

        if let Ok(metadata) = std::fs::metadata(path) {
            std::fs::set_permissions(temp.path(), metadata.permissions())
                .map_err(|e| io_error("copy permissions to", path, e))?;
        }

        temp.persist(path)
            .map_err(|e| io_error("replace", path, e.error))?;
        Ok(())
    }

    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        let metadata = std::fs::metadata(path).map_err(|e| io_error("stat", path, e))?;
        Ok(FileMetadata {
            size: metadata.len(),
            is_dir: metadata.is_dir(),
            is_file: metadata.is_file(),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| io_error("list", path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(path = %path.display(), "skipping unreadable entry: {err}");
                    continue;
                }
            };
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    warn!(path = %path.join(&name).display(), "skipping entry with a non-UTF-8 name");
                }
            }
        }
        Ok(names)
    }
}
