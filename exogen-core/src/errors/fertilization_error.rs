/// Artificial fertilization errors.
#[derive(Debug, thiserror::Error)]
pub enum FertilizationError {
    #[error("ploidy mismatch: paternal {paternal_ploidy}, maternal {maternal_ploidy}; both gametes must be haploid")]
    PloidyMismatch {
        paternal_ploidy: u8,
        maternal_ploidy: u8,
    },

    #[error("embryo non-viable at formation: viability {viability:.3} below minimum {minimum:.3}")]
    NonViable { viability: f64, minimum: f64 },

    #[error("gametes share no populated chromosome; no genotype can be combined")]
    NoSharedChromosomes,
}
