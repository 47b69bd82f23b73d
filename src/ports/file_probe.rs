//! Filesystem metadata queries used by the status reporter.

use crate::domain::AppError;

/// Port for a single read-only metadata query per path.
///
/// `path` is interpreted relative to the implementation's root unless absolute.
pub trait FileProbe {
    /// Size in bytes of the entry at `path`, or `None` if nothing exists there.
    ///
    /// Failures other than "not found" are returned as errors.
    fn file_size(&self, path: &str) -> Result<Option<u64>, AppError>;
}
