use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait FileSystem: Send + Sync {
    /// Get the current working directory
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The absolute path to the current working directory
    /// * `Err` - If the current directory cannot be determined
    fn current_dir(&self) -> Result<PathBuf, FileSystemError>;

    /// Read the whole content of a file
    ///
    /// # Arguments
    /// * `path` - The file to read
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The raw bytes of the file
    /// * `Err` - If the file is missing or cannot be read
    fn read(&self, path: &Path) -> Result<Vec<u8>, FileSystemError>;
}
