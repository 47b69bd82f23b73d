mod file_probe;

pub use file_probe::MockFileProbe;
