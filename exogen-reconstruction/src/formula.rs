//! Reconstruction scoring formulas.
//!
//! ```text
//! completeness  = clamp(quality × 1.2 × algorithmPenalty, 0.3, 1.0)
//! geneCount     = trunc(completeness × genePoolSize)
//! mutationRate  = baseRate × (1 − quality)
//! ```

/// Signal amplification factor: partial signal recovers more than it reads.
pub const AMPLIFICATION: f64 = 1.2;
/// Floor on completeness — some fraction is always recoverable.
pub const MIN_COMPLETENESS: f64 = 0.3;

/// Completeness of a reconstruction given recovery quality.
///
/// `algorithm_penalty` is 1.0 for marker-guided runs.
pub fn completeness(quality: f64, algorithm_penalty: f64) -> f64 {
    (quality * AMPLIFICATION * algorithm_penalty).clamp(MIN_COMPLETENESS, 1.0)
}

/// Number of genes recovered at a given completeness.
pub fn gene_count(completeness: f64, gene_pool_size: usize) -> usize {
    (completeness * gene_pool_size as f64) as usize
}

/// Residual mutation rate introduced by signal loss.
pub fn mutation_rate(base_rate: f64, quality: f64) -> f64 {
    base_rate * (1.0 - quality)
}

/// Every intermediate of one reconstruction, for observability.
#[derive(Debug, Clone)]
pub struct ReconstructionBreakdown {
    pub quality: f64,
    pub algorithm_penalty: f64,
    pub completeness: f64,
    pub gene_count: usize,
    pub mutation_rate: f64,
}

/// Compute the full breakdown without sampling any genes.
pub fn compute_breakdown(
    quality: f64,
    algorithm_penalty: f64,
    gene_pool_size: usize,
    base_mutation_rate: f64,
) -> ReconstructionBreakdown {
    let completeness = completeness(quality, algorithm_penalty);
    ReconstructionBreakdown {
        quality,
        algorithm_penalty,
        completeness,
        gene_count: gene_count(completeness, gene_pool_size),
        mutation_rate: mutation_rate(base_mutation_rate, quality),
    }
}
