use serde::{Deserialize, Serialize};

use super::assessment::ViabilityAssessment;
use super::biosignature::Biosignature;
use super::embryo::Embryo;
use super::gamete::ArtificialGamete;
use super::statistics::RunStatistics;
use crate::genome::ReconstructedGenome;

/// State of an embryo at the end of one development day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// Development day this snapshot closes (1-based).
    pub day: u32,
    /// Cell count at end of day.
    pub total_cells: u64,
    /// Viability at end of day.
    pub viability: f64,
    /// Whether a new anomaly appeared this day.
    pub new_anomaly: bool,
}

/// Result of a development run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentReport {
    /// Embryo id.
    pub embryo_id: String,
    /// Days simulated in this run.
    pub days_simulated: u32,
    /// Whether the embryo hit the blastocyst cell cap.
    pub reached_blastocyst: bool,
    /// Anomalies that appeared during this run.
    pub anomalies_detected: u32,
    /// Per-day timeline. Empty unless anomaly monitoring was requested.
    pub snapshots: Vec<DaySnapshot>,
}

/// Full record of one crossing: every stage product plus the final assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossingOutcome {
    pub paternal_biosignature: Biosignature,
    pub maternal_biosignature: Biosignature,
    pub paternal_genome: ReconstructedGenome,
    pub maternal_genome: ReconstructedGenome,
    pub paternal_gamete: ArtificialGamete,
    pub maternal_gamete: ArtificialGamete,
    pub embryo: Embryo,
    pub development: DevelopmentReport,
    pub assessment: ViabilityAssessment,
    pub statistics: RunStatistics,
}
