//! # exogen-core
//!
//! Foundation crate for the exogen simulation pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod genome;
pub mod ids;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ExogenConfig;
pub use errors::{ExogenError, ExogenResult};
pub use genome::{Allele, Gene, Karyotype, ReconstructedGenome, Viability};
pub use models::{ArtificialGamete, Biosignature, Embryo};
