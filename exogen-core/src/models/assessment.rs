use serde::{Deserialize, Serialize};

/// Viability class an embryo lands in after development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityClass {
    /// Viability >= 0.5 — viable for implantation.
    ImplantationViable,
    /// Viability in [0.3, 0.5) — viable but reduced.
    Reduced,
    /// Viability < 0.3 — not viable.
    NonViable,
}

/// Final viability assessment of a developed embryo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViabilityAssessment {
    pub embryo_id: String,
    /// Final viability value.
    pub viability: f64,
    /// Threshold class.
    pub class: ViabilityClass,
    /// Weighted anomaly burden, normalized by days developed.
    pub anomaly_burden: f64,
    /// Specific issues found.
    pub issues: Vec<String>,
}

impl ViabilityAssessment {
    /// Whether the embryo passed overall.
    pub fn is_implantation_viable(&self) -> bool {
        self.class == ViabilityClass::ImplantationViable
    }
}
