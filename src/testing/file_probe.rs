//! Test double for `FileProbe`.

use std::collections::HashMap;
use std::io;

use crate::domain::AppError;
use crate::ports::FileProbe;

/// In-memory `FileProbe`: paths map to sizes or to a forced I/O failure.
#[derive(Debug, Default, Clone)]
pub struct MockFileProbe {
    sizes: HashMap<String, u64>,
    failures: HashMap<String, io::ErrorKind>,
}

impl MockFileProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, bytes: u64) -> Self {
        self.sizes.insert(path.to_string(), bytes);
        self
    }

    pub fn with_failure(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.failures.insert(path.to_string(), kind);
        self
    }
}

impl FileProbe for MockFileProbe {
    fn file_size(&self, path: &str) -> Result<Option<u64>, AppError> {
        if let Some(kind) = self.failures.get(path) {
            return Err(AppError::from(io::Error::new(*kind, "mock probe failure")));
        }
        Ok(self.sizes.get(path).copied())
    }
}
