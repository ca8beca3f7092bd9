use serde::{Deserialize, Serialize};

use super::defaults;

/// Gametogenesis and fertilization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossingConfig {
    /// Viability below which a formed embryo is rejected.
    pub minimum_viability: f64,
    /// Minimum genes sampled per chromosome during meiosis.
    pub meiosis_min_sample: usize,
    /// Maximum genes sampled per chromosome during meiosis.
    pub meiosis_max_sample: usize,
    /// Base aneuploidy probability at fertilization.
    /// Scaled by (1 - base viability): healthier crossings see fewer anomalies.
    pub aneuploidy_rate: f64,
    /// Base expressed-recessive-mutation probability at fertilization.
    pub recessive_expression_rate: f64,
    /// Viability fraction lost per fertilization anomaly.
    pub anomaly_viability_penalty: f64,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            minimum_viability: defaults::DEFAULT_MINIMUM_VIABILITY,
            meiosis_min_sample: defaults::DEFAULT_MEIOSIS_MIN_SAMPLE,
            meiosis_max_sample: defaults::DEFAULT_MEIOSIS_MAX_SAMPLE,
            aneuploidy_rate: defaults::DEFAULT_ANEUPLOIDY_RATE,
            recessive_expression_rate: defaults::DEFAULT_RECESSIVE_EXPRESSION_RATE,
            anomaly_viability_penalty: defaults::DEFAULT_ANOMALY_VIABILITY_PENALTY,
        }
    }
}
