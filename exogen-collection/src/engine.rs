use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use exogen_core::config::CollectionConfig;
use exogen_core::errors::{CollectionError, ExogenResult};
use exogen_core::genome::Karyotype;
use exogen_core::ids;
use exogen_core::models::{AnalysisMethod, Biosignature, SampleOrigin};

use crate::profiles;

/// One collection attempt against an exoplanetary sample.
#[derive(Debug, Clone)]
pub struct CollectionRequest {
    /// Planet the sample came from.
    pub planet: String,
    /// Physical medium of the sample.
    pub origin: SampleOrigin,
    /// Instrument to read it with.
    pub method: AnalysisMethod,
    /// Override the per-origin default recovery quality.
    pub quality_override: Option<f64>,
}

impl CollectionRequest {
    /// Request with the per-origin default quality.
    pub fn new(planet: impl Into<String>, origin: SampleOrigin, method: AnalysisMethod) -> Self {
        Self {
            planet: planet.into(),
            origin,
            method,
            quality_override: None,
        }
    }

    /// Request with an explicit recovery quality.
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality_override = Some(quality);
        self
    }
}

/// Biosignature acquisition engine.
///
/// Owns a seeded PRNG; identical seeds and request sequences produce
/// identical biosignatures.
pub struct CollectionEngine {
    config: CollectionConfig,
    rng: StdRng,
    /// Collections performed so far; feeds the content-derived id.
    sequence: u64,
}

impl CollectionEngine {
    /// Create an engine with default config.
    pub fn new(seed: u64) -> Self {
        Self::with_config(CollectionConfig::default(), seed)
    }

    /// Create an engine with explicit config.
    pub fn with_config(config: CollectionConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            sequence: 0,
        }
    }

    /// Collect a biosignature from an exoplanetary sample.
    pub fn collect(&mut self, request: &CollectionRequest) -> ExogenResult<Biosignature> {
        if request.planet.trim().is_empty() {
            return Err(CollectionError::EmptyPlanet.into());
        }
        // Holographic imprints only resolve under magnetic resonance.
        if request.origin == SampleOrigin::MagneticHologram
            && request.method != AnalysisMethod::MagneticResonance
        {
            return Err(CollectionError::IncompatibleMethod {
                method: format!("{:?}", request.method),
                origin: format!("{:?}", request.origin),
            }
            .into());
        }

        let quality = request
            .quality_override
            .unwrap_or_else(|| self.config.quality_for(request.origin));
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(CollectionError::QualityOutOfRange { quality }.into());
        }

        // The sample's karyotype is unknown until the panel is matched.
        let karyotype = if self.rng.gen_bool(0.5) {
            Karyotype::Xy
        } else {
            Karyotype::Xx
        };
        let phase_offset: f64 = self.rng.gen();

        self.sequence += 1;
        let id = ids::short_id(
            "bio",
            format!(
                "{}/{:?}/{}/{}/{}",
                request.planet, request.origin, karyotype, phase_offset, self.sequence
            )
            .as_bytes(),
        );

        Ok(Biosignature {
            id,
            origin: request.origin,
            method: request.method,
            planet: request.planet.clone(),
            collected_at: Utc::now(),
            phase_offset,
            reconstruction_quality: quality,
            markers: profiles::profile_for(karyotype),
        })
    }

    /// Collect a batch of biosignatures, failing on the first bad request.
    pub fn collect_batch(
        &mut self,
        requests: &[CollectionRequest],
    ) -> ExogenResult<Vec<Biosignature>> {
        requests.iter().map(|r| self.collect(r)).collect()
    }
}
