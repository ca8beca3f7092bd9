//! # exogen-pipeline
//!
//! Orchestrates a full crossing: collection → reconstruction →
//! gametogenesis → fertilization → development → analysis, with a tracing
//! span per phase. Cohort runs fan out on rayon with per-index derived
//! seeds, so results are independent of thread scheduling.

pub mod cohort;
pub mod engine;
pub mod seeds;
pub mod telemetry;

pub use cohort::{simulate_cohort, CohortResult};
pub use engine::{CrossingEngine, CrossingRequest};
