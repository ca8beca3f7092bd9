use std::collections::BTreeMap;

use exogen_core::genome::{Allele, Gene, Viability};
use exogen_core::models::ArtificialGamete;
use exogen_fertilization::FertilizationEngine;
use proptest::prelude::*;

fn make_gamete(id: &str, viability: f64, genes_per_chromosome: usize) -> ArtificialGamete {
    let mut chromosomes = BTreeMap::new();
    for chromosome in 1..=23u8 {
        let genes = (0..genes_per_chromosome)
            .map(|i| Gene {
                chromosome,
                position: (i + 1) as u32,
                allele: Allele::T,
                expressivity: 0.5,
            })
            .collect();
        chromosomes.insert(chromosome, genes);
    }
    ArtificialGamete {
        id: id.to_string(),
        source_genome: "gen_prop0000".to_string(),
        ploidy: 23,
        chromosomes,
        viability: Viability::new(viability),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn formed_embryos_meet_minimum_viability(
        seed in any::<u64>(),
        vp in 0.0f64..=1.0,
        vm in 0.0f64..=1.0,
    ) {
        let mut engine = FertilizationEngine::new(seed);
        let paternal = make_gamete("gam_aaaaaaaa", vp, 60);
        let maternal = make_gamete("gam_bbbbbbbb", vm, 60);
        if let Ok(embryo) = engine.fertilize(&paternal, &maternal) {
            prop_assert!(embryo.viability.value() >= 0.3);
            prop_assert!(embryo.viability.value() <= (vp + vm) / 2.0 + 1e-9);
            prop_assert!(embryo.anomalies.len() <= 2);
        }
    }

    #[test]
    fn fertilization_is_seed_deterministic(seed in any::<u64>()) {
        let paternal = make_gamete("gam_aaaaaaaa", 0.9, 60);
        let maternal = make_gamete("gam_bbbbbbbb", 0.9, 60);
        let a = FertilizationEngine::new(seed).fertilize(&paternal, &maternal);
        let b = FertilizationEngine::new(seed).fertilize(&paternal, &maternal);
        match (a, b) {
            (Ok(ea), Ok(eb)) => {
                prop_assert_eq!(ea.genotype, eb.genotype);
                prop_assert_eq!(ea.viability, eb.viability);
                prop_assert_eq!(ea.division_rate, eb.division_rate);
            }
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "same seed diverged"),
        }
    }

    #[test]
    fn genotype_size_tracks_shorter_gamete(
        seed in any::<u64>(),
        np in 1usize..80,
        nm in 1usize..80,
    ) {
        let mut engine = FertilizationEngine::new(seed);
        let paternal = make_gamete("gam_aaaaaaaa", 0.95, np);
        let maternal = make_gamete("gam_bbbbbbbb", 0.95, nm);
        if let Ok(embryo) = engine.fertilize(&paternal, &maternal) {
            prop_assert_eq!(embryo.genotype.len(), 23 * np.min(nm));
        }
    }
}
