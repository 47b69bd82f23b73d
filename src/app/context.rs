use crate::domain::DatasetRegistry;
use crate::ports::FileProbe;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: FileProbe> {
    probe: P,
    registry: DatasetRegistry,
}

impl<P: FileProbe> AppContext<P> {
    /// Create a new application context.
    pub fn new(probe: P, registry: DatasetRegistry) -> Self {
        Self { probe, registry }
    }

    /// Get a reference to the file probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Get a reference to the dataset registry.
    pub fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }
}
