//! Dataset registry loading.
//!
//! The built-in registry is embedded at build time; an alternate registry
//! file may replace it wholesale. Pure parsing lives in `domain::registry`.

mod load_registry;

pub use load_registry::load_registry;
