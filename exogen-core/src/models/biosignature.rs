use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::genome::Karyotype;

/// Physical medium a biosignature was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrigin {
    /// Mineralized residue. Default recovery quality 0.7.
    Ashes,
    /// Magnetic-field holographic imprint. Default recovery quality 0.6.
    MagneticHologram,
}

/// Instrument used to analyze the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    Spectrometry,
    MagneticResonance,
}

/// Genetic marker panel recovered with a biosignature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerProfile {
    /// Karyotype the panel points at.
    pub karyotype: Karyotype,
    /// Sex chromosomes observed in the panel.
    pub sex_chromosomes: Vec<String>,
    /// Karyotype-typical markers (e.g. SRY for XY panels).
    pub typical_markers: Vec<String>,
    /// Dominant expression traits recovered alongside the markers.
    pub dominant_expressions: Vec<String>,
}

impl MarkerProfile {
    /// Whether the panel carries the given marker.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.typical_markers.iter().any(|m| m == marker)
    }

    /// Whether the panel is empty (nothing for marker-guided reconstruction).
    pub fn is_empty(&self) -> bool {
        self.typical_markers.is_empty()
    }
}

/// An environmental/genetic sample record recovered from an exoplanetary source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Biosignature {
    /// Content-derived identifier, `bio_` prefix.
    pub id: String,
    /// Medium the signature was recovered from.
    pub origin: SampleOrigin,
    /// Instrument used for the recovery.
    pub method: AnalysisMethod,
    /// Planet the sample came from.
    pub planet: String,
    /// When the sample was collected.
    pub collected_at: DateTime<Utc>,
    /// Stochastic phase offset of the recovery window, [0.0, 1.0).
    pub phase_offset: f64,
    /// Recovery quality, (0.0, 1.0]. Drives reconstruction completeness.
    pub reconstruction_quality: f64,
    /// Recovered marker panel.
    pub markers: MarkerProfile,
}
