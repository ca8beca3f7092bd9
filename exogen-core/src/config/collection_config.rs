use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SampleOrigin;

/// Collection subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Recovery quality of ash samples, (0.0, 1.0].
    pub ash_quality: f64,
    /// Recovery quality of magnetic-hologram samples, (0.0, 1.0].
    pub hologram_quality: f64,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            ash_quality: defaults::DEFAULT_ASH_QUALITY,
            hologram_quality: defaults::DEFAULT_HOLOGRAM_QUALITY,
        }
    }
}

impl CollectionConfig {
    /// Default recovery quality for a sample origin.
    pub fn quality_for(&self, origin: SampleOrigin) -> f64 {
        match origin {
            SampleOrigin::Ashes => self.ash_quality,
            SampleOrigin::MagneticHologram => self.hologram_quality,
        }
    }
}
