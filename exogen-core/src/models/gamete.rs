use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::genome::{Gene, Viability};

/// A haploid gamete developed artificially from a reconstructed genome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtificialGamete {
    /// Content-derived identifier, `gam_` prefix.
    pub id: String,
    /// Id of the genome this gamete was developed from.
    pub source_genome: String,
    /// Chromosome count. Always 23 for a viable gamete.
    pub ploidy: u8,
    /// Recombined gene selection, keyed by chromosome number.
    /// BTreeMap so iteration order is deterministic.
    pub chromosomes: BTreeMap<u8, Vec<Gene>>,
    /// Gamete viability.
    pub viability: Viability,
}

impl ArtificialGamete {
    /// Number of chromosomes that carry at least one gene.
    pub fn active_chromosomes(&self) -> usize {
        self.chromosomes.values().filter(|g| !g.is_empty()).count()
    }

    /// Whether the gamete is haploid.
    pub fn is_haploid(&self) -> bool {
        self.ploidy == crate::constants::HAPLOID_CHROMOSOMES
    }
}
