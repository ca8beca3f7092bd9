//! # exogen-collection
//!
//! Biosignature acquisition: recovers a marker panel and a quality score
//! from an exoplanetary sample (ash residue or magnetic-hologram imprint).

pub mod engine;
pub mod profiles;

pub use engine::{CollectionEngine, CollectionRequest};
