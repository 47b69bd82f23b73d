use std::fs;
use std::path::Path;

use crate::adapters::embedded_assets;
use crate::domain::{AppError, DatasetRegistry};

/// Load the dataset registry from `path`, or the embedded default when `None`.
pub fn load_registry(path: Option<&Path>) -> Result<DatasetRegistry, AppError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| AppError::RegistryRead {
                path: path.to_path_buf(),
                source,
            })?;
            DatasetRegistry::parse_toml(&content)
        }
        None => DatasetRegistry::parse_toml(embedded_assets::default_registry_source()?),
    }
}
