use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exogen_core::config::CrossingConfig;
use exogen_core::constants::HAPLOID_CHROMOSOMES;
use exogen_core::errors::{ExogenResult, GametogenesisError};
use exogen_core::genome::{ReconstructedGenome, Viability};
use exogen_core::ids;
use exogen_core::models::ArtificialGamete;

use crate::meiosis;

/// Weight of sequencing quality in gamete viability; the rest is stochastic.
const QUALITY_WEIGHT: f64 = 0.7;

/// Artificial meiosis engine.
pub struct GametogenesisEngine {
    config: CrossingConfig,
    rng: StdRng,
}

impl GametogenesisEngine {
    /// Engine with default config.
    pub fn new(seed: u64) -> Self {
        Self::with_config(CrossingConfig::default(), seed)
    }

    /// Engine with explicit config.
    pub fn with_config(config: CrossingConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Develop a haploid gamete from a reconstructed genome.
    pub fn develop_gamete(
        &mut self,
        genome: &ReconstructedGenome,
    ) -> ExogenResult<ArtificialGamete> {
        if genome.genes.is_empty() {
            return Err(GametogenesisError::EmptyGenome {
                genome_id: genome.id.clone(),
            }
            .into());
        }

        let partition = meiosis::partition_by_chromosome(genome);
        let chromosomes = meiosis::recombine(
            &mut self.rng,
            &partition,
            self.config.meiosis_min_sample,
            self.config.meiosis_max_sample,
        );

        let stochastic: f64 = self.rng.gen();
        let viability = Viability::new(
            genome.sequencing_quality * QUALITY_WEIGHT + stochastic * (1.0 - QUALITY_WEIGHT),
        );

        Ok(ArtificialGamete {
            id: ids::short_id("gam", genome.id.as_bytes()),
            source_genome: genome.id.clone(),
            ploidy: HAPLOID_CHROMOSOMES,
            chromosomes,
            viability,
        })
    }
}
