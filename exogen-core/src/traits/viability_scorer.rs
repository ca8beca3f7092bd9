use crate::models::{Embryo, ViabilityAssessment};

/// Final viability assessment of a developed embryo.
pub trait IViabilityScorer: Send + Sync {
    /// Classify the embryo and compute its anomaly burden.
    fn assess(&self, embryo: &Embryo) -> ViabilityAssessment;
}
