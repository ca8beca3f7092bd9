//! Threshold classification of developed embryos.

use exogen_core::genome::Viability;
use exogen_core::models::{Embryo, ViabilityAssessment, ViabilityClass};
use exogen_core::traits::IViabilityScorer;

use crate::burden;

/// Anomaly burden above which an issue is raised even for viable embryos.
pub const BURDEN_WARNING: f64 = 0.2;

/// Classify an embryo and collect assessment issues.
pub fn assess_viability(embryo: &Embryo) -> ViabilityAssessment {
    let viability = embryo.viability.value();
    let mut issues = Vec::new();

    let class = if viability >= Viability::IMPLANTATION {
        ViabilityClass::ImplantationViable
    } else if viability >= Viability::MINIMUM {
        issues.push(format!(
            "viability {:.3} below implantation threshold {:.3}",
            viability,
            Viability::IMPLANTATION
        ));
        ViabilityClass::Reduced
    } else {
        issues.push(format!(
            "viability {:.3} below minimum {:.3}",
            viability,
            Viability::MINIMUM
        ));
        ViabilityClass::NonViable
    };

    let anomaly_burden = burden::anomaly_burden(embryo);
    if anomaly_burden > BURDEN_WARNING {
        issues.push(format!(
            "anomaly burden {:.3} above warning level {:.3}",
            anomaly_burden, BURDEN_WARNING
        ));
    }
    if !embryo.is_blastocyst() && embryo.developmental_day >= 24 {
        issues.push(format!(
            "blastocyst stage not reached after {} days",
            embryo.developmental_day
        ));
    }

    ViabilityAssessment {
        embryo_id: embryo.id.clone(),
        viability,
        class,
        anomaly_burden,
        issues,
    }
}

/// Default scorer, usable behind `dyn IViabilityScorer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbryoScorer;

impl IViabilityScorer for EmbryoScorer {
    fn assess(&self, embryo: &Embryo) -> ViabilityAssessment {
        assess_viability(embryo)
    }
}
