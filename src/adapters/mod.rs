pub mod embedded_assets;
pub mod filesystem_probe;

pub use filesystem_probe::FilesystemProbe;
