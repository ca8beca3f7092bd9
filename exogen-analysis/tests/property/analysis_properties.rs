use std::collections::BTreeMap;

use exogen_analysis::{assess_viability, burden};
use exogen_core::genome::Viability;
use exogen_core::models::{Anomaly, AnomalyKind, DevelopmentalState, Embryo, ViabilityClass};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = AnomalyKind> {
    prop_oneof![
        Just(AnomalyKind::Aneuploidy),
        Just(AnomalyKind::ExpressedRecessiveMutation),
        Just(AnomalyKind::DevelopmentalArrest),
    ]
}

fn make_embryo(viability: f64, day: u32, anomalies: Vec<Anomaly>) -> Embryo {
    Embryo {
        id: "emb_prop_0000".to_string(),
        state: DevelopmentalState::Developing,
        developmental_day: day,
        total_cells: 1_000,
        division_rate: 1.4,
        viability: Viability::new(viability),
        anomalies,
        genotype: BTreeMap::new(),
    }
}

proptest! {
    #[test]
    fn class_matches_thresholds(viability in 0.0f64..=1.0, day in 1u32..40) {
        let assessment = assess_viability(&make_embryo(viability, day, vec![]));
        let expected = if viability >= 0.5 {
            ViabilityClass::ImplantationViable
        } else if viability >= 0.3 {
            ViabilityClass::Reduced
        } else {
            ViabilityClass::NonViable
        };
        prop_assert_eq!(assessment.class, expected);
    }

    #[test]
    fn burden_is_non_negative_and_additive(
        kinds in proptest::collection::vec(arb_kind(), 0..20),
        day in 1u32..40,
    ) {
        let anomalies: Vec<Anomaly> = kinds
            .iter()
            .map(|&kind| Anomaly { kind, detected_on_day: 0 })
            .collect();
        let count = anomalies.len();
        let embryo = make_embryo(0.7, day, anomalies);
        let b = burden::anomaly_burden(&embryo);
        prop_assert!(b >= 0.0);
        // Max weight is 1.0 per anomaly.
        prop_assert!(b <= count as f64 / day as f64 + 1e-9);
    }

    #[test]
    fn non_viable_always_carries_an_issue(viability in 0.0f64..0.3, day in 1u32..20) {
        let assessment = assess_viability(&make_embryo(viability, day, vec![]));
        prop_assert!(!assessment.issues.is_empty());
        prop_assert!(!assessment.is_implantation_viable());
    }
}
