//! Static marker profiles per karyotype.
//!
//! Recovery never sequences a full panel; it matches the recovered signal
//! against these reference profiles.

use exogen_core::genome::Karyotype;
use exogen_core::models::MarkerProfile;

/// Marker that identifies an XY panel during reconstruction.
pub const XY_DETERMINING_MARKER: &str = "SRY";

/// Reference marker profile for a karyotype.
pub fn profile_for(karyotype: Karyotype) -> MarkerProfile {
    match karyotype {
        Karyotype::Xy => MarkerProfile {
            karyotype,
            sex_chromosomes: vec!["X".to_string(), "Y".to_string()],
            typical_markers: vec![XY_DETERMINING_MARKER.to_string(), "AZF".to_string()],
            dominant_expressions: vec!["testosterone".to_string(), "musculature".to_string()],
        },
        Karyotype::Xx => MarkerProfile {
            karyotype,
            sex_chromosomes: vec!["X".to_string(), "X".to_string()],
            typical_markers: vec!["WNT4".to_string(), "RSPO1".to_string()],
            dominant_expressions: vec![
                "estrogen".to_string(),
                "mammary_development".to_string(),
            ],
        },
    }
}
