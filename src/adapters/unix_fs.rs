use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ports::{FileSystem, FileSystemError};

#[derive(Debug)]
pub struct UnixFs;

impl UnixFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnixFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for UnixFs {
    fn current_dir(&self) -> Result<PathBuf, FileSystemError> {
        let dir = std::env::current_dir()?;
        Ok(dir)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        let content = fs::read(path)?;
        Ok(content)
    }
}
