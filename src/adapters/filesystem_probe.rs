//! `std::fs`-backed implementation of the `FileProbe` port.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::FileProbe;

/// Probes entries relative to a root directory.
#[derive(Debug, Clone)]
pub struct FilesystemProbe {
    root: PathBuf,
}

impl FilesystemProbe {
    /// Create a probe rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a probe rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

impl FileProbe for FilesystemProbe {
    fn file_size(&self, path: &str) -> Result<Option<u64>, AppError> {
        // Follows symlinks: a dangling link counts as absent.
        match fs::metadata(self.resolve(path)) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}
