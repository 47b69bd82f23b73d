//! workflow-manager: status reporter for the tweet-dataset analysis workflow.
//!
//! Checks whether each dataset's data, notebook, export, and checkpoint files
//! exist, reports their sizes, and prints the workflow instructions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ArtifactStatus, DatasetStatus, ReportOptions, StatusReport, file_status, instructions,
    registry, render_instructions, render_report, status, status_with_instructions,
};
pub use domain::{AppError, ArtifactRole, DatasetDescriptor, DatasetRegistry, FileStatus};
