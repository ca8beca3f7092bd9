pub mod collection_config;
pub mod crossing_config;
pub mod defaults;
pub mod development_config;
pub mod reconstruction_config;

pub use collection_config::CollectionConfig;
pub use crossing_config::CrossingConfig;
pub use development_config::DevelopmentConfig;
pub use reconstruction_config::ReconstructionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ExogenError, ExogenResult};

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExogenConfig {
    /// Master PRNG seed. Every stage seed is derived from this, so a full
    /// run is reproducible from the config alone.
    pub seed: u64,
    pub collection: CollectionConfig,
    pub reconstruction: ReconstructionConfig,
    pub crossing: CrossingConfig,
    pub development: DevelopmentConfig,
}

impl ExogenConfig {
    /// Parse a config from TOML text. Missing sections take defaults.
    pub fn from_toml_str(text: &str) -> ExogenResult<Self> {
        let config: ExogenConfig = toml::from_str(text).map_err(|e| ExogenError::Config {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make the stochastic models degenerate.
    pub fn validate(&self) -> ExogenResult<()> {
        if !(0.0..=1.0).contains(&self.collection.ash_quality)
            || !(0.0..=1.0).contains(&self.collection.hologram_quality)
        {
            return Err(ExogenError::Config {
                message: "collection qualities must be within [0.0, 1.0]".to_string(),
            });
        }
        if self.crossing.meiosis_min_sample == 0
            || self.crossing.meiosis_min_sample > self.crossing.meiosis_max_sample
        {
            return Err(ExogenError::Config {
                message: format!(
                    "meiosis sample bounds invalid: {}..={}",
                    self.crossing.meiosis_min_sample, self.crossing.meiosis_max_sample
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.crossing.minimum_viability) {
            return Err(ExogenError::Config {
                message: "minimum viability must be within [0.0, 1.0]".to_string(),
            });
        }
        if self.development.blastocyst_cell_cap == 0 {
            return Err(ExogenError::Config {
                message: "blastocyst cell cap must be positive".to_string(),
            });
        }
        Ok(())
    }
}
