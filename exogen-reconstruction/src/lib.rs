//! # exogen-reconstruction
//!
//! Probabilistic genome inference: completeness from recovery quality,
//! weighted allele sampling, residual mutation rate from signal loss.

pub mod engine;
pub mod formula;
pub mod sampling;

pub use engine::{ReconstructionAlgorithm, ReconstructionEngine};
pub use formula::ReconstructionBreakdown;
