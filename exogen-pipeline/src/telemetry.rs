//! Tracing setup and span names per pipeline phase.

use tracing_subscriber::EnvFilter;

/// Span names as constants for programmatic use.
pub mod names {
    pub const COLLECTION: &str = "exogen.collection";
    pub const RECONSTRUCTION: &str = "exogen.reconstruction";
    pub const GAMETOGENESIS: &str = "exogen.gametogenesis";
    pub const FERTILIZATION: &str = "exogen.fertilization";
    pub const DEVELOPMENT: &str = "exogen.development";
    pub const ANALYSIS: &str = "exogen.analysis";
}

/// Initialize the global subscriber from `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Initialize with JSON output, for machine-readable logs.
pub fn init_json() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
