use serde::{Deserialize, Serialize};

use super::gene::Gene;
use super::karyotype::Karyotype;

/// A genome inferred from a single biosignature.
///
/// `completeness` is the fraction of the reference gene pool the
/// reconstruction recovered; it is never below 0.3 (partial signal is
/// always recoverable) and never above 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructedGenome {
    /// Content-derived identifier, `gen_` prefix.
    pub id: String,
    /// Karyotype inferred from the marker panel (or drawn, for de novo runs).
    pub karyotype: Karyotype,
    /// Fraction of the gene pool recovered, [0.3, 1.0].
    pub completeness: f64,
    /// Recovered gene calls.
    pub genes: Vec<Gene>,
    /// Residual per-locus mutation rate introduced by signal loss.
    pub mutation_rate: f64,
    /// Sequencing quality inherited from the source biosignature.
    pub sequencing_quality: f64,
}

impl ReconstructedGenome {
    /// Genes located on the given chromosome.
    pub fn genes_on_chromosome(&self, chromosome: u8) -> impl Iterator<Item = &Gene> {
        self.genes.iter().filter(move |g| g.chromosome == chromosome)
    }

    /// Number of recovered genes.
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }
}
