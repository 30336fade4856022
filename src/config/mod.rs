//! Configuration for csa-indicators

mod loader;

pub use loader::{load_config, SUPPORTED_SCHEMA_VERSION};
