//! Dataset status report: presence and size of every registry artifact.

use std::fmt::Write as _;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, ArtifactRole, DatasetRegistry, FileStatus};
use crate::ports::FileProbe;

pub const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactStatus {
    pub role: ArtifactRole,
    pub path: String,
    #[serde(flatten)]
    pub file: FileStatus,
    /// Probe failure other than "not found".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ArtifactStatus {
    /// Human-readable state, e.g. `✅ 1.5 MB` or `⏳ Not exported`.
    pub fn state_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("⚠️ Unreadable ({})", error);
        }
        match (self.file.exists, self.role.reports_size()) {
            (true, true) => format!("✅ {:.1} MB", self.file.size_mb),
            (true, false) => "✅ Ready".to_string(),
            (false, _) => self.role.absent_text().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStatus {
    pub name: String,
    pub artifacts: Vec<ArtifactStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub title: String,
    pub datasets: Vec<DatasetStatus>,
}

impl StatusReport {
    pub fn unreadable_count(&self) -> usize {
        self.datasets
            .iter()
            .flat_map(|dataset| &dataset.artifacts)
            .filter(|artifact| artifact.error.is_some())
            .count()
    }
}

/// Build the status report for every dataset in the context's registry.
pub fn execute<P: FileProbe>(ctx: &AppContext<P>) -> StatusReport {
    build_report(ctx.probe(), ctx.registry())
}

/// Query one path. Absence is a normal status; other failures are errors.
pub fn compute_file_status<P: FileProbe + ?Sized>(
    probe: &P,
    path: &str,
) -> Result<FileStatus, AppError> {
    Ok(match probe.file_size(path)? {
        Some(bytes) => FileStatus::present(bytes),
        None => FileStatus::missing(),
    })
}

/// Probe every artifact sequentially in registry order.
///
/// Probe failures are recorded on the artifact and never abort the report.
pub fn build_report<P: FileProbe + ?Sized>(
    probe: &P,
    registry: &DatasetRegistry,
) -> StatusReport {
    let datasets = registry
        .datasets
        .iter()
        .map(|dataset| DatasetStatus {
            name: dataset.name.clone(),
            artifacts: dataset
                .artifacts()
                .map(|(role, path)| {
                    let (file, error) = match compute_file_status(probe, path) {
                        Ok(file) => (file, None),
                        Err(err) => (FileStatus::missing(), Some(err.to_string())),
                    };
                    ArtifactStatus { role, path: path.to_string(), file, error }
                })
                .collect(),
        })
        .collect();

    StatusReport { title: registry.title.clone(), datasets }
}

/// Render the report as the operator-facing text block.
pub fn render_report(report: &StatusReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 {}", report.title);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for dataset in &report.datasets {
        let _ = writeln!(out);
        let _ = writeln!(out, "🔍 {} Dataset:", dataset.name.to_uppercase());
        for artifact in &dataset.artifacts {
            let _ = writeln!(out, "  {}: {}", artifact.role.label(), artifact.state_text());
        }
    }

    out
}
