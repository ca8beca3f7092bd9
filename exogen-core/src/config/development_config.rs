use serde::{Deserialize, Serialize};

use super::defaults;

/// Development subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    /// Base daily anomaly probability, scaled by (1 - viability) and
    /// environment pressure.
    pub daily_anomaly_rate: f64,
    /// Viability multiplier applied when a development anomaly appears.
    pub anomaly_viability_factor: f64,
    /// Cell cap marking the blastocyst stage.
    pub blastocyst_cell_cap: u64,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            daily_anomaly_rate: defaults::DEFAULT_DAILY_ANOMALY_RATE,
            anomaly_viability_factor: defaults::DEFAULT_ANOMALY_VIABILITY_FACTOR,
            blastocyst_cell_cap: defaults::DEFAULT_BLASTOCYST_CELL_CAP,
        }
    }
}
