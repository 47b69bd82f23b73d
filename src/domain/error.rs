use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for workflow-manager operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Registry file could not be read.
    #[error("Failed to read dataset registry {}: {source}", path.display())]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Registry file is not valid TOML or does not match the expected shape.
    #[error("Failed to parse dataset registry: {0}")]
    RegistryParse(#[from] toml::de::Error),

    /// Registry parsed but violates a structural rule.
    #[error("Invalid dataset registry: {0}")]
    InvalidRegistry(String),

    /// Instructions template failed to parse or render.
    #[error("Template error: {0}")]
    Template(String),

    /// Status report could not be encoded.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Embedded asset missing or unreadable.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn invalid_registry<S: Into<String>>(message: S) -> Self {
        AppError::InvalidRegistry(message.into())
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::RegistryRead { source: err, .. } => err.kind(),
            AppError::RegistryParse(_) | AppError::InvalidRegistry(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::Template(_) | AppError::Serialization(_) | AppError::InternalError(_) => {
                io::ErrorKind::Other
            }
        }
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err.to_string())
    }
}
