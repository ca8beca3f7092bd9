//! # exogen-analysis
//!
//! Exobiological analysis of developed embryos: threshold classification,
//! weighted anomaly burden, and aggregate run statistics.

pub mod burden;
pub mod scoring;
pub mod statistics;

pub use scoring::{assess_viability, EmbryoScorer};
