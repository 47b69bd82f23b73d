use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::{AppError, ArtifactRole};

/// A named group of expected file paths, one per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDescriptor {
    pub name: String,
    pub heading: String,
    pub artifacts: BTreeMap<ArtifactRole, String>,
    pub guidance: Vec<String>,
}

impl DatasetDescriptor {
    /// Artifacts in report order.
    pub fn artifacts(&self) -> impl Iterator<Item = (ArtifactRole, &str)> {
        self.artifacts.iter().map(|(role, path)| (*role, path.as_str()))
    }

    pub fn path_for(&self, role: ArtifactRole) -> Option<&str> {
        self.artifacts.get(&role).map(String::as_str)
    }
}

/// The fixed set of datasets a status report covers, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRegistry {
    pub title: String,
    pub datasets: Vec<DatasetDescriptor>,
}

impl DatasetRegistry {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let dto: dto::RegistryDto = toml::from_str(content)?;
        let registry: DatasetRegistry = dto.try_into().map_err(AppError::InvalidRegistry)?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn dataset(&self, name: &str) -> Option<&DatasetDescriptor> {
        self.datasets.iter().find(|dataset| dataset.name == name)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.datasets.is_empty() {
            return Err(AppError::invalid_registry("no datasets defined"));
        }

        let mut seen = HashSet::new();
        for dataset in &self.datasets {
            if dataset.name.trim().is_empty() {
                return Err(AppError::invalid_registry("dataset name must not be empty"));
            }
            if !seen.insert(dataset.name.as_str()) {
                return Err(AppError::invalid_registry(format!(
                    "duplicate dataset '{}'",
                    dataset.name
                )));
            }
            if dataset.artifacts.is_empty() {
                return Err(AppError::invalid_registry(format!(
                    "dataset '{}' defines no artifacts",
                    dataset.name
                )));
            }
            for (role, path) in dataset.artifacts() {
                if path.trim().is_empty() {
                    return Err(AppError::invalid_registry(format!(
                        "dataset '{}' has an empty {} path",
                        dataset.name, role
                    )));
                }
            }
        }

        Ok(())
    }
}

mod dto {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct RegistryDto {
        pub title: Option<String>,
        #[serde(default)]
        pub datasets: Vec<DatasetDto>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct DatasetDto {
        pub name: String,
        pub heading: Option<String>,
        #[serde(default)]
        pub guidance: Vec<String>,
        #[serde(default)]
        pub artifacts: BTreeMap<String, String>,
    }

    impl TryFrom<RegistryDto> for DatasetRegistry {
        type Error = String;

        fn try_from(dto: RegistryDto) -> Result<Self, Self::Error> {
            let title = dto.title.unwrap_or_else(|| "Dataset Analysis Status".to_string());
            let datasets: Vec<DatasetDescriptor> = dto
                .datasets
                .into_iter()
                .map(DatasetDescriptor::try_from)
                .collect::<Result<_, String>>()?;
            Ok(DatasetRegistry { title, datasets })
        }
    }

    impl TryFrom<DatasetDto> for DatasetDescriptor {
        type Error = String;

        fn try_from(dto: DatasetDto) -> Result<Self, Self::Error> {
            let mut artifacts = BTreeMap::new();
            for (key, path) in dto.artifacts {
                let role = ArtifactRole::from_key(&key).ok_or_else(|| {
                    format!(
                        "unknown artifact role '{}' in dataset '{}' (expected data, notebook, export, or checkpoint)",
                        key, dto.name
                    )
                })?;
                if artifacts.insert(role, path).is_some() {
                    return Err(format!(
                        "artifact role '{}' repeated in dataset '{}'",
                        role, dto.name
                    ));
                }
            }

            let heading =
                dto.heading.unwrap_or_else(|| format!("{} Dataset", dto.name.to_uppercase()));

            Ok(DatasetDescriptor { name: dto.name, heading, artifacts, guidance: dto.guidance })
        }
    }
}
