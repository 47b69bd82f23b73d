//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemProbe;
use crate::app::AppContext;
use crate::app::commands;
use crate::app::config::load_registry;

pub use crate::app::commands::instructions::render_instructions;
pub use crate::app::commands::status::{
    ArtifactStatus, DatasetStatus, StatusReport, compute_file_status, render_report,
};
pub use crate::domain::{AppError, ArtifactRole, DatasetRegistry, FileStatus};

/// Where registry paths resolve and which registry to use.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Directory relative registry paths resolve against. Defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Registry TOML file replacing the built-in registry.
    pub registry: Option<PathBuf>,
}

/// Load the registry selected by `options`. Never touches the dataset files.
pub fn registry(options: &ReportOptions) -> Result<DatasetRegistry, AppError> {
    load_registry(options.registry.as_deref())
}

fn create_context(
    options: &ReportOptions,
    registry: DatasetRegistry,
) -> Result<AppContext<FilesystemProbe>, AppError> {
    let probe = match &options.root {
        Some(root) => FilesystemProbe::new(root.clone()),
        None => FilesystemProbe::current()?,
    };
    Ok(AppContext::new(probe, registry))
}

/// Check every registry artifact on disk.
pub fn status(options: &ReportOptions) -> Result<StatusReport, AppError> {
    let ctx = create_context(options, registry(options)?)?;
    Ok(commands::status::execute(&ctx))
}

/// Status report plus instructions, both from a single registry load.
pub fn status_with_instructions(
    options: &ReportOptions,
) -> Result<(StatusReport, String), AppError> {
    let ctx = create_context(options, registry(options)?)?;
    let report = commands::status::execute(&ctx);
    let instructions = render_instructions(ctx.registry())?;
    Ok((report, instructions))
}

/// Render the workflow instructions for the selected registry.
pub fn instructions(options: &ReportOptions) -> Result<String, AppError> {
    render_instructions(&registry(options)?)
}

/// Presence and size of a single path, relative to the current directory unless absolute.
pub fn file_status(path: &str) -> Result<FileStatus, AppError> {
    let probe = FilesystemProbe::current()?;
    compute_file_status(&probe, path)
}
