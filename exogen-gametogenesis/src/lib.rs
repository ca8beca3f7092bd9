//! # exogen-gametogenesis
//!
//! Artificial meiosis: partitions a reconstructed genome by chromosome,
//! samples a recombined subset per chromosome, and scores gamete viability.

pub mod engine;
pub mod meiosis;

pub use engine::GametogenesisEngine;
