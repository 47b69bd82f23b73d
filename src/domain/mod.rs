pub mod artifact_role;
pub mod error;
pub mod file_status;
pub mod registry;

pub use artifact_role::ArtifactRole;
pub use error::AppError;
pub use file_status::{BYTES_PER_MEGABYTE, FileStatus};
pub use registry::{DatasetDescriptor, DatasetRegistry};
