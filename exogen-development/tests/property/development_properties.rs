use std::collections::BTreeMap;

use exogen_core::genome::Viability;
use exogen_core::models::{DevelopmentalState, Embryo, EnvironmentParams};
use exogen_core::traits::IDevelopmentModel;
use exogen_development::DevelopmentEngine;
use proptest::prelude::*;

fn make_embryo(viability: f64, division_rate: f64) -> Embryo {
    Embryo {
        id: "emb_prop_0000".to_string(),
        state: DevelopmentalState::EmbryoFormed,
        developmental_day: 0,
        total_cells: 1,
        division_rate,
        viability: Viability::new(viability),
        anomalies: vec![],
        genotype: BTreeMap::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_monotone_and_capped(
        seed in any::<u64>(),
        viability in 0.3f64..=1.0,
        division_rate in 1.1f64..1.8,
        days in 1u32..60,
    ) {
        let mut engine = DevelopmentEngine::new(seed);
        let mut embryo = make_embryo(viability, division_rate);
        let report = engine
            .simulate(&mut embryo, days, true, &EnvironmentParams::default())
            .unwrap();

        let mut last_cells = 1u64;
        for snapshot in &report.snapshots {
            prop_assert!(snapshot.total_cells >= last_cells);
            prop_assert!(snapshot.total_cells <= 1_000_000);
            last_cells = snapshot.total_cells;
        }
    }

    #[test]
    fn viability_monotone_non_increasing(
        seed in any::<u64>(),
        viability in 0.3f64..=1.0,
        days in 1u32..60,
    ) {
        let mut engine = DevelopmentEngine::new(seed);
        let mut embryo = make_embryo(viability, 1.4);
        let report = engine
            .simulate(&mut embryo, days, true, &EnvironmentParams::default())
            .unwrap();

        let mut last = viability + 1e-9;
        for snapshot in &report.snapshots {
            prop_assert!(snapshot.viability <= last);
            last = snapshot.viability + 1e-9;
        }
    }

    #[test]
    fn day_counter_matches_run_length(
        seed in any::<u64>(),
        days in 1u32..60,
    ) {
        let mut engine = DevelopmentEngine::new(seed);
        let mut embryo = make_embryo(0.8, 1.4);
        engine
            .simulate(&mut embryo, days, false, &EnvironmentParams::default())
            .unwrap();
        prop_assert_eq!(embryo.developmental_day, days);
    }

    #[test]
    fn simulation_is_seed_deterministic(seed in any::<u64>(), days in 1u32..30) {
        let run = |seed| {
            let mut engine = DevelopmentEngine::new(seed);
            let mut embryo = make_embryo(0.6, 1.5);
            engine
                .simulate(&mut embryo, days, true, &EnvironmentParams::default())
                .unwrap();
            embryo
        };
        let a = run(seed);
        let b = run(seed);
        prop_assert_eq!(a.total_cells, b.total_cells);
        prop_assert_eq!(a.viability, b.viability);
        prop_assert_eq!(a.anomalies, b.anomalies);
    }
}
