//! Platform runtime abstraction
//!
//! The walker never touches `std::fs` directly. It goes through a [`Runtime`],
//! so the same traversal runs against the real filesystem ([`NativeRuntime`])
//! or an in-memory tree in tests.

pub mod native;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use std::path::{Path, PathBuf};

pub use native::NativeRuntime;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryRuntime;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur during runtime operations
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Runtime error: {0}")]
    Other(String),
}

/// File metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// File size in bytes
    pub size: u64,
    pub is_dir: bool,
    pub is_file: bool,
}

/// File I/O used by the walker
pub trait Runtime: Send + Sync + std::fmt::Debug {
    fn read_file(&self, path: &Path) -> RuntimeResult<Vec<u8>>;

    /// Replace the content of `path`
    ///
    /// Implementations either write the whole content or leave the file as it
    /// was.
    fn write_file(&self, path: &Path, content: &[u8]) -> RuntimeResult<()>;

    fn metadata(&self, path: &Path) -> RuntimeResult<FileMetadata>;

    fn exists(&self, path: &Path) -> bool;

    /// Names of the entries directly inside `path`, in no particular order
    fn read_dir(&self, path: &Path) -> RuntimeResult<Vec<String>>;
}
