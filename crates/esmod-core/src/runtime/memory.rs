//! In-memory runtime for tests

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{FileMetadata, Runtime, RuntimeError, RuntimeResult};

/// A file tree held in memory
///
/// Directories exist implicitly as ancestors of stored files. Every
/// successful write is recorded so tests can assert which files were
/// persisted.
#[derive(Debug, Default)]
pub struct MemoryRuntime {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    writes: Mutex<Vec<PathBuf>>,
    read_only: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemoryRuntime::insert`]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) {
        self.files
            .lock()
            .insert(path.into(), content.as_ref().to_vec());
    }

    /// Make writes to `path` fail
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.read_only.lock().insert(path.into());
    }

    /// Current content of `path` as UTF-8
    pub fn text(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Paths written so far, in write order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().clone()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .lock()
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }
}

impl Runtime for MemoryRuntime {
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>> {
        self.files
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()> {
        if self.read_only.lock().contains(path) {
            return Err(RuntimeError::Io(format!(
                "Failed to write {}: permission denied",
                path.display()
            )));
        }
        self.files.lock().insert(path.to_path_buf(), content.to_vec());
        self.writes.lock().push(path.to_path_buf());
        Ok(())
    }

    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata> {
        if let Some(content) = self.files.lock().get(path) {
            return Ok(FileMetadata {
                size: content.len() as u64,
                is_dir: false,
                is_file: true,
            });
        }
        if self.is_dir(path) {
            return Ok(FileMetadata {
                size: 0,
                is_dir: true,
                is_file: false,
            });
        }
        Err(RuntimeError::FileNotFound(path.to_path_buf()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().contains_key(path) || self.is_dir(path)
    }

    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>> {
        if !self.is_dir(path) {
            return Err(RuntimeError::FileNotFound(path.to_path_buf()));
        }
        let names: BTreeSet<String> = self
            .files
            .lock()
            .keys()
            .filter_map(|file| file.strip_prefix(path).ok())
            .filter_map(|rest| rest.components().next())
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_implied_by_files() {
        let runtime = MemoryRuntime::new()
            .with_file("/p/src/a.ts", "a")
            .with_file("/p/src/nested/b.ts", "b");

        assert!(runtime.metadata(Path::new("/p/src")).unwrap().is_dir);
        assert!(runtime.metadata(Path::new("/p/src/a.ts")).unwrap().is_file);
        assert_eq!(
            runtime.read_dir(Path::new("/p/src")).unwrap(),
            vec!["a.ts".to_string(), "nested".to_string()]
        );
        assert!(!runtime.exists(Path::new("/p/other")));
    }

    #[test]
    fn records_writes() {
        let runtime = MemoryRuntime::new().with_file("/a.ts", "a");
        runtime.write_file(Path::new("/a.ts"), b"b").unwrap();
        assert_eq!(runtime.text("/a.ts").as_deref(), Some("b"));
        assert_eq!(runtime.writes(), vec![PathBuf::from("/a.ts")]);

        runtime.deny_writes("/a.ts");
        assert!(runtime.write_file(Path::new("/a.ts"), b"c").is_err());
        assert_eq!(runtime.text("/a.ts").as_deref(), Some("b"));
    }
}
