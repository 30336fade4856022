//! Schema types for csa-indicators

mod config;

pub use config::{Config, EnumerationOptions};
