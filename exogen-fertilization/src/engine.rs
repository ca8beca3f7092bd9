use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exogen_core::config::CrossingConfig;
use exogen_core::constants::HAPLOID_CHROMOSOMES;
use exogen_core::errors::{ExogenResult, FertilizationError};
use exogen_core::genome::Viability;
use exogen_core::ids;
use exogen_core::models::{
    Anomaly, AnomalyKind, ArtificialGamete, DevelopmentalState, Embryo,
};

use crate::combine;

/// Division-rate band drawn at fertilization.
const DIVISION_RATE_MIN: f64 = 1.1;
const DIVISION_RATE_MAX: f64 = 1.8;

/// Artificial fertilization engine.
pub struct FertilizationEngine {
    config: CrossingConfig,
    rng: StdRng,
}

impl FertilizationEngine {
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

    /// Fuse two gametes into an embryo.
    ///
    /// Fails when the gametes are not both haploid, share no populated
    /// chromosome, or the formed embryo falls below minimum viability.
    pub fn fertilize(
        &mut self,
        paternal: &ArtificialGamete,
        maternal: &ArtificialGamete,
    ) -> ExogenResult<Embryo> {
        if paternal.ploidy != HAPLOID_CHROMOSOMES || maternal.ploidy != HAPLOID_CHROMOSOMES {
            return Err(FertilizationError::PloidyMismatch {
                paternal_ploidy: paternal.ploidy,
                maternal_ploidy: maternal.ploidy,
            }
            .into());
        }

        let genotype = combine::combine_genotype(&mut self.rng, paternal, maternal);
        if genotype.is_empty() {
            return Err(FertilizationError::NoSharedChromosomes.into());
        }

        let base_viability =
            (paternal.viability.value() + maternal.viability.value()) / 2.0;

        // Anomaly pressure rises as base viability drops.
        let mut anomalies = Vec::new();
        if self.rng.gen::<f64>() < self.config.aneuploidy_rate * (1.0 - base_viability) {
            anomalies.push(Anomaly {
                kind: AnomalyKind::Aneuploidy,
                detected_on_day: 0,
            });
        }
        if self.rng.gen::<f64>()
            < self.config.recessive_expression_rate * (1.0 - base_viability)
        {
            anomalies.push(Anomaly {
                kind: AnomalyKind::ExpressedRecessiveMutation,
                detected_on_day: 0,
            });
        }

        let final_viability = base_viability
            * (1.0 - self.config.anomaly_viability_penalty * anomalies.len() as f64);
        if final_viability < self.config.minimum_viability {
            return Err(FertilizationError::NonViable {
                viability: final_viability,
                minimum: self.config.minimum_viability,
            }
            .into());
        }

        let id = format!(
            "emb_{}_{}",
            &ids::hex_portion(&paternal.id)[..4],
            &ids::hex_portion(&maternal.id)[..4]
        );

        Ok(Embryo {
            id,
            state: DevelopmentalState::EmbryoFormed,
            developmental_day: 0,
            total_cells: 1,
            division_rate: self.rng.gen_range(DIVISION_RATE_MIN..DIVISION_RATE_MAX),
            viability: Viability::new(final_viability),
            anomalies,
            genotype,
        })
    }
}
