use std::fmt;

use serde::Serialize;

/// The purpose a file path serves within a dataset.
///
/// Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactRole {
    /// Raw tweet dump (JSONL).
    Data,
    /// Analysis notebook.
    Notebook,
    /// LLM training data export.
    Export,
    /// Resumable-processing checkpoint.
    Checkpoint,
}

impl ArtifactRole {
    /// All roles in report order.
    pub const ALL: [ArtifactRole; 4] = [
        ArtifactRole::Data,
        ArtifactRole::Notebook,
        ArtifactRole::Export,
        ArtifactRole::Checkpoint,
    ];

    /// Key used in registry files.
    pub fn key(&self) -> &'static str {
        match self {
            ArtifactRole::Data => "data",
            ArtifactRole::Notebook => "notebook",
            ArtifactRole::Export => "export",
            ArtifactRole::Checkpoint => "checkpoint",
        }
    }

    /// Parse a role from its registry key.
    pub fn from_key(key: &str) -> Option<ArtifactRole> {
        match key.trim().to_lowercase().as_str() {
            "data" => Some(ArtifactRole::Data),
            "notebook" => Some(ArtifactRole::Notebook),
            "export" => Some(ArtifactRole::Export),
            "checkpoint" => Some(ArtifactRole::Checkpoint),
            _ => None,
        }
    }

    /// Label shown in the status report.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactRole::Data => "Data file",
            ArtifactRole::Notebook => "Notebook",
            ArtifactRole::Export => "Export file",
            ArtifactRole::Checkpoint => "Checkpoint",
        }
    }

    /// Whether a present artifact reports its size rather than a ready marker.
    pub fn reports_size(&self) -> bool {
        !matches!(self, ArtifactRole::Notebook)
    }

    /// Status text for an absent artifact.
    pub fn absent_text(&self) -> &'static str {
        match self {
            ArtifactRole::Data | ArtifactRole::Notebook => "❌ Missing",
            ArtifactRole::Export => "⏳ Not exported",
            ArtifactRole::Checkpoint => "⏳ No checkpoint",
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_keys_roundtrip() {
        for role in ArtifactRole::ALL {
            assert_eq!(ArtifactRole::from_key(role.key()), Some(role));
        }
    }

    #[test]
    fn role_keys_are_case_insensitive() {
        assert_eq!(ArtifactRole::from_key("Export"), Some(ArtifactRole::Export));
        assert_eq!(ArtifactRole::from_key("archive"), None);
    }

    #[test]
    fn ordering_matches_report_order() {
        let mut roles = vec![
            ArtifactRole::Checkpoint,
            ArtifactRole::Export,
            ArtifactRole::Data,
            ArtifactRole::Notebook,
        ];
        roles.sort();
        assert_eq!(roles, ArtifactRole::ALL.to_vec());
    }

    #[test]
    fn only_notebook_reports_ready_instead_of_size() {
        assert!(!ArtifactRole::Notebook.reports_size());
        assert!(ArtifactRole::Data.reports_size());
        assert!(ArtifactRole::Export.reports_size());
        assert!(ArtifactRole::Checkpoint.reports_size());
    }
}
