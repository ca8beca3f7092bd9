use crate::errors::ExogenResult;
use crate::genome::ReconstructedGenome;
use crate::models::Biosignature;

/// Genome inference from a biosignature.
pub trait IReconstructor: Send {
    /// Reconstruct a genome. Takes `&mut self` because inference consumes PRNG state.
    fn reconstruct(&mut self, biosignature: &Biosignature) -> ExogenResult<ReconstructedGenome>;
}
