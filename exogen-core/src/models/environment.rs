use serde::{Deserialize, Serialize};

/// Environment parameters for a development run.
///
/// Stress scales the daily anomaly rate multiplicatively: 1.0 is the
/// neutral incubation environment, 2.0 doubles anomaly pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentParams {
    /// Incubation temperature in °C.
    pub temperature_c: f64,
    /// Nutrient availability, [0.0, 1.0].
    pub nutrient_level: f64,
    /// Anomaly-pressure multiplier, >= 0.0.
    pub stress_factor: f64,
}

impl Default for EnvironmentParams {
    fn default() -> Self {
        Self {
            temperature_c: 37.0,
            nutrient_level: 1.0,
            stress_factor: 1.0,
        }
    }
}

impl EnvironmentParams {
    /// Effective anomaly-pressure multiplier.
    ///
    /// Nutrient starvation adds pressure on top of the explicit stress
    /// factor: a fully starved environment doubles it.
    pub fn anomaly_pressure(&self) -> f64 {
        let starvation = 1.0 + (1.0 - self.nutrient_level.clamp(0.0, 1.0));
        (self.stress_factor * starvation).max(0.0)
    }
}
