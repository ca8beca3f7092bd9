//! Weighted anomaly burden.

use exogen_core::models::{AnomalyKind, Embryo};

/// Weight of an aneuploidy finding.
pub const ANEUPLOIDY_WEIGHT: f64 = 1.0;
/// Weight of an expressed recessive mutation.
pub const RECESSIVE_WEIGHT: f64 = 0.5;
/// Weight of a developmental arrest event.
pub const ARREST_WEIGHT: f64 = 0.75;

fn weight(kind: AnomalyKind) -> f64 {
    match kind {
        AnomalyKind::Aneuploidy => ANEUPLOIDY_WEIGHT,
        AnomalyKind::ExpressedRecessiveMutation => RECESSIVE_WEIGHT,
        AnomalyKind::DevelopmentalArrest => ARREST_WEIGHT,
    }
}

/// Weighted anomaly score, normalized by days developed.
///
/// An embryo that has not developed yet (day 0) is normalized over one day
/// so fertilization-time anomalies still register.
pub fn anomaly_burden(embryo: &Embryo) -> f64 {
    let total: f64 = embryo.anomalies.iter().map(|a| weight(a.kind)).sum();
    total / embryo.developmental_day.max(1) as f64
}
