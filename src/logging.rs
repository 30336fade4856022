//! Tracing subscriber setup for binaries and notebook kernels that embed
//! this crate. The library itself only emits events.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{CsaError, Result};

/// Filter directive used when RUST_LOG is not set.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    }
}

/// Install a global fmt subscriber. RUST_LOG overrides the flags.
///
/// # Errors
/// * `Wrapped` - If a global subscriber is already installed
pub fn init(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| CsaError::wrap(e, "Failed to initialise logging"))
}
