use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exogen_core::config::ReconstructionConfig;
use exogen_core::errors::{ExogenResult, ReconstructionError};
use exogen_core::genome::{Karyotype, ReconstructedGenome};
use exogen_core::ids;
use exogen_core::models::Biosignature;
use exogen_core::traits::IReconstructor;

use crate::formula::{self, ReconstructionBreakdown};
use crate::sampling;

/// Marker that flags an XY panel.
const XY_MARKER: &str = "SRY";

/// Inference strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconstructionAlgorithm {
    /// Use the recovered marker panel to fix the karyotype. The default.
    #[default]
    MarkerGuided,
    /// Ignore the panel; draw the karyotype and pay a completeness penalty.
    DeNovo,
}

/// Genome inference engine.
pub struct ReconstructionEngine {
    config: ReconstructionConfig,
    algorithm: ReconstructionAlgorithm,
    rng: StdRng,
}

impl ReconstructionEngine {
    /// Marker-guided engine with default config.
    pub fn new(seed: u64) -> Self {
        Self::with_config(ReconstructionConfig::default(), seed)
    }

    /// Marker-guided engine with explicit config.
    pub fn with_config(config: ReconstructionConfig, seed: u64) -> Self {
        Self {
            config,
            algorithm: ReconstructionAlgorithm::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Switch the inference strategy.
    pub fn with_algorithm(mut self, algorithm: ReconstructionAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The active inference strategy.
    pub fn algorithm(&self) -> ReconstructionAlgorithm {
        self.algorithm
    }

    /// Completeness penalty for the active algorithm.
    fn algorithm_penalty(&self) -> f64 {
        match self.algorithm {
            ReconstructionAlgorithm::MarkerGuided => 1.0,
            ReconstructionAlgorithm::DeNovo => self.config.de_novo_penalty,
        }
    }

    /// Scoring breakdown for a biosignature without running the sampler.
    pub fn breakdown(&self, biosignature: &Biosignature) -> ReconstructionBreakdown {
        formula::compute_breakdown(
            biosignature.reconstruction_quality,
            self.algorithm_penalty(),
            self.config.gene_pool_size,
            self.config.base_mutation_rate,
        )
    }

    fn infer_karyotype(&mut self, biosignature: &Biosignature) -> Karyotype {
        match self.algorithm {
            ReconstructionAlgorithm::MarkerGuided => {
                if biosignature.markers.has_marker(XY_MARKER) {
                    Karyotype::Xy
                } else {
                    Karyotype::Xx
                }
            }
            ReconstructionAlgorithm::DeNovo => {
                if self.rng.gen_bool(0.5) {
                    Karyotype::Xy
                } else {
                    Karyotype::Xx
                }
            }
        }
    }
}

impl IReconstructor for ReconstructionEngine {
    fn reconstruct(&mut self, biosignature: &Biosignature) -> ExogenResult<ReconstructedGenome> {
        if biosignature.reconstruction_quality <= 0.0 {
            return Err(ReconstructionError::NoRecoverableSignal {
                biosignature_id: biosignature.id.clone(),
                quality: biosignature.reconstruction_quality,
            }
            .into());
        }
        if self.algorithm == ReconstructionAlgorithm::MarkerGuided
            && biosignature.markers.is_empty()
        {
            return Err(ReconstructionError::EmptyMarkerPanel {
                biosignature_id: biosignature.id.clone(),
            }
            .into());
        }

        let breakdown = self.breakdown(biosignature);
        let karyotype = self.infer_karyotype(biosignature);
        let genes = sampling::sample_genes(&mut self.rng, breakdown.gene_count);

        Ok(ReconstructedGenome {
            id: ids::short_id("gen", biosignature.id.as_bytes()),
            karyotype,
            completeness: breakdown.completeness,
            genes,
            mutation_rate: breakdown.mutation_rate,
            sequencing_quality: biosignature.reconstruction_quality,
        })
    }
}
