//! # exogen-development
//!
//! Day-stepped embryonic development state machine: exponential cell growth
//! under a division rate drawn at fertilization, anomaly pressure scaled by
//! viability and environment, and a hard blastocyst cell cap.

pub mod engine;
pub mod growth;

pub use engine::DevelopmentEngine;
