use tracing::{info, info_span};

use exogen_analysis::EmbryoScorer;
use exogen_collection::{CollectionEngine, CollectionRequest};
use exogen_core::config::ExogenConfig;
use exogen_core::errors::{ExogenError, ExogenResult};
use exogen_core::genome::ReconstructedGenome;
use exogen_core::models::{
    AnalysisMethod, Biosignature, CrossingOutcome, Embryo, EnvironmentParams, RunStatistics,
    SampleOrigin,
};
use exogen_core::traits::{IDevelopmentModel, IReconstructor, IViabilityScorer};
use exogen_development::DevelopmentEngine;
use exogen_fertilization::FertilizationEngine;
use exogen_gametogenesis::GametogenesisEngine;
use exogen_reconstruction::ReconstructionEngine;

use crate::seeds::{self, tags};

/// Inputs for one crossing.
#[derive(Debug, Clone)]
pub struct CrossingRequest {
    pub paternal: CollectionRequest,
    pub maternal: CollectionRequest,
    /// Days of embryonic development to simulate.
    pub days: u32,
    /// Record a per-day timeline in the development report.
    pub monitor_anomalies: bool,
    pub environment: EnvironmentParams,
}

impl CrossingRequest {
    /// The canonical crossing: paternal line from ash residue, maternal
    /// line from a magnetic-hologram imprint, 14 days of development.
    pub fn standard(planet: impl Into<String>) -> Self {
        let planet = planet.into();
        Self {
            paternal: CollectionRequest::new(
                planet.clone(),
                SampleOrigin::Ashes,
                AnalysisMethod::Spectrometry,
            ),
            maternal: CollectionRequest::new(
                planet,
                SampleOrigin::MagneticHologram,
                AnalysisMethod::MagneticResonance,
            ),
            days: 14,
            monitor_anomalies: true,
            environment: EnvironmentParams::default(),
        }
    }
}

/// The full-crossing engine.
///
/// Owns one engine per stage, each with a seed derived from the master
/// seed, plus registries of everything produced so far.
pub struct CrossingEngine {
    config: ExogenConfig,
    collector: CollectionEngine,
    reconstructor: ReconstructionEngine,
    gametogenesis: GametogenesisEngine,
    fertilization: FertilizationEngine,
    development: DevelopmentEngine,
    scorer: EmbryoScorer,
    biosignatures: Vec<Biosignature>,
    genomes: Vec<ReconstructedGenome>,
    embryos: Vec<Embryo>,
    gametes_developed: u64,
    fertilizations_failed: u64,
}

impl CrossingEngine {
    /// Build an engine from config. All stage seeds derive from `config.seed`.
    pub fn new(config: ExogenConfig) -> ExogenResult<Self> {
        config.validate()?;
        let seed = config.seed;
        Ok(Self {
            collector: CollectionEngine::with_config(
                config.collection.clone(),
                seeds::derive(seed, tags::COLLECTION),
            ),
            reconstructor: ReconstructionEngine::with_config(
                config.reconstruction.clone(),
                seeds::derive(seed, tags::RECONSTRUCTION),
            ),
            gametogenesis: GametogenesisEngine::with_config(
                config.crossing.clone(),
                seeds::derive(seed, tags::GAMETOGENESIS),
            ),
            fertilization: FertilizationEngine::with_config(
                config.crossing.clone(),
                seeds::derive(seed, tags::FERTILIZATION),
            ),
            development: DevelopmentEngine::with_config(
                config.development.clone(),
                seeds::derive(seed, tags::DEVELOPMENT),
            ),
            scorer: EmbryoScorer,
            config,
            biosignatures: Vec::new(),
            genomes: Vec::new(),
            embryos: Vec::new(),
            gametes_developed: 0,
            fertilizations_failed: 0,
        })
    }

    /// The active config.
    pub fn config(&self) -> &ExogenConfig {
        &self.config
    }

    /// Everything collected so far.
    pub fn biosignatures(&self) -> &[Biosignature] {
        &self.biosignatures
    }

    /// Everything reconstructed so far.
    pub fn genomes(&self) -> &[ReconstructedGenome] {
        &self.genomes
    }

    /// Every embryo formed so far.
    pub fn embryos(&self) -> &[Embryo] {
        &self.embryos
    }

    /// Aggregate statistics over everything this engine has produced.
    pub fn statistics(&self) -> RunStatistics {
        let mean_viability = if self.embryos.is_empty() {
            0.0
        } else {
            self.embryos
                .iter()
                .map(|e| e.viability.value())
                .sum::<f64>()
                / self.embryos.len() as f64
        };
        RunStatistics {
            biosignatures_collected: self.biosignatures.len() as u64,
            genomes_reconstructed: self.genomes.len() as u64,
            gametes_developed: self.gametes_developed,
            embryos_formed: self.embryos.len() as u64,
            fertilizations_failed: self.fertilizations_failed,
            mean_viability,
        }
    }

    /// Run one full crossing.
    pub fn run_crossing(&mut self, request: &CrossingRequest) -> ExogenResult<CrossingOutcome> {
        // Phase 1: collection.
        let (paternal_bio, maternal_bio) = {
            let _span = info_span!("exogen.collection", planet = %request.paternal.planet).entered();
            let paternal = self.collector.collect(&request.paternal)?;
            let maternal = self.collector.collect(&request.maternal)?;
            info!(paternal = %paternal.id, maternal = %maternal.id, "biosignatures collected");
            self.biosignatures.push(paternal.clone());
            self.biosignatures.push(maternal.clone());
            (paternal, maternal)
        };

        // Phase 2: reconstruction.
        let (paternal_genome, maternal_genome) = {
            let _span = info_span!("exogen.reconstruction").entered();
            let paternal = self.reconstructor.reconstruct(&paternal_bio)?;
            let maternal = self.reconstructor.reconstruct(&maternal_bio)?;
            info!(
                paternal = %paternal.id,
                paternal_completeness = paternal.completeness,
                maternal = %maternal.id,
                maternal_completeness = maternal.completeness,
                "genomes reconstructed"
            );
            self.genomes.push(paternal.clone());
            self.genomes.push(maternal.clone());
            (paternal, maternal)
        };

        // Phase 3: gametogenesis.
        let (paternal_gamete, maternal_gamete) = {
            let _span = info_span!("exogen.gametogenesis").entered();
            let paternal = self.gametogenesis.develop_gamete(&paternal_genome)?;
            let maternal = self.gametogenesis.develop_gamete(&maternal_genome)?;
            self.gametes_developed += 2;
            info!(
                paternal_viability = paternal.viability.value(),
                maternal_viability = maternal.viability.value(),
                "gametes developed"
            );
            (paternal, maternal)
        };

        // Phase 4: fertilization.
        let mut embryo = {
            let _span = info_span!("exogen.fertilization").entered();
            match self.fertilization.fertilize(&paternal_gamete, &maternal_gamete) {
                Ok(embryo) => {
                    info!(embryo = %embryo.id, viability = embryo.viability.value(), "embryo formed");
                    embryo
                }
                Err(e) => {
                    self.fertilizations_failed += 1;
                    return Err(e);
                }
            }
        };

        // Phase 5: development.
        let development = {
            let _span = info_span!("exogen.development", days = request.days).entered();
            self.development.simulate(
                &mut embryo,
                request.days,
                request.monitor_anomalies,
                &request.environment,
            )?
        };
        self.embryos.push(embryo.clone());

        // Final: analysis.
        let assessment = {
            let _span = info_span!("exogen.analysis").entered();
            let assessment = self.scorer.assess(&embryo);
            info!(
                embryo = %embryo.id,
                class = ?assessment.class,
                viability = assessment.viability,
                "crossing assessed"
            );
            assessment
        };

        Ok(CrossingOutcome {
            paternal_biosignature: paternal_bio,
            maternal_biosignature: maternal_bio,
            paternal_genome,
            maternal_genome,
            paternal_gamete,
            maternal_gamete,
            embryo,
            development,
            assessment,
            statistics: self.statistics(),
        })
    }

    /// Run crossings until one forms a viable embryo, up to `max_attempts`.
    ///
    /// Fertilization rejects are retried; any other error is returned.
    pub fn run_until_viable(
        &mut self,
        request: &CrossingRequest,
        max_attempts: u32,
    ) -> ExogenResult<CrossingOutcome> {
        let mut last_err = None;
        for _ in 0..max_attempts {
            match self.run_crossing(request) {
                Ok(outcome) => return Ok(outcome),
                Err(e @ ExogenError::Fertilization(_)) => last_err = Some(e),
                Err(e) => return Err(e),
            }
        }
        Err(last_err.unwrap_or(ExogenError::Config {
            message: "run_until_viable called with max_attempts = 0".to_string(),
        }))
    }
}
