//! # exogen-fertilization
//!
//! Artificial fertilization: ploidy compatibility, index-wise Mendelian
//! genotype combination, anomaly draws scaled by gamete health, and
//! viability-gated embryo formation.

pub mod combine;
pub mod engine;

pub use engine::FertilizationEngine;
