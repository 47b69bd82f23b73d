use serde::Serialize;

/// Bytes in one reported megabyte.
pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Presence and size of a single filesystem entry, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FileStatus {
    pub exists: bool,
    pub size_mb: f64,
}

impl FileStatus {
    /// Status of an entry that was not found. Size is always zero.
    pub fn missing() -> Self {
        Self { exists: false, size_mb: 0.0 }
    }

    /// Status of an entry present with `bytes` bytes.
    pub fn present(bytes: u64) -> Self {
        Self { exists: true, size_mb: bytes as f64 / BYTES_PER_MEGABYTE }
    }
}
