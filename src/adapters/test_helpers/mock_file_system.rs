//! Mock filesystem for testing
//!
//! Provides an in-memory filesystem holding file contents keyed by path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::ports::{FileSystem, FileSystemError};

/// Mock filesystem for testing
pub struct MockFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
    current_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: Some(PathBuf::from("/srv/lemmy")),
        }
    }

    /// Add a file with the given content
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.as_ref().to_vec());
    }

    /// Set the current directory for testing
    pub fn set_current_dir(&mut self, path: impl AsRef<Path>) {
        self.current_dir = Some(path.as_ref().to_path_buf());
    }

    /// Make `current_dir` fail, as when the directory was removed underneath us
    pub fn remove_current_dir(&mut self) {
        self.current_dir = None;
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        self.current_dir.clone().ok_or_else(|| {
            FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Current directory not found",
            ))
        })
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        self.files.get(path).cloned().ok_or_else(|| {
            FileSystemError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "File not found",
            ))
        })
    }
}
