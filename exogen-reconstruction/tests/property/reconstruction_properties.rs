use chrono::Utc;
use exogen_core::genome::Karyotype;
use exogen_core::models::{AnalysisMethod, Biosignature, MarkerProfile, SampleOrigin};
use exogen_core::traits::IReconstructor;
use exogen_reconstruction::{formula, ReconstructionEngine};
use proptest::prelude::*;

fn make_biosignature(quality: f64) -> Biosignature {
    Biosignature {
        id: "bio_fixture0".to_string(),
        origin: SampleOrigin::Ashes,
        method: AnalysisMethod::Spectrometry,
        planet: "TRAPPIST-1e".to_string(),
        collected_at: Utc::now(),
        phase_offset: 0.5,
        reconstruction_quality: quality,
        markers: MarkerProfile {
            karyotype: Karyotype::Xx,
            sex_chromosomes: vec!["X".into(), "X".into()],
            typical_markers: vec!["WNT4".into(), "RSPO1".into()],
            dominant_expressions: vec!["estrogen".into()],
        },
    }
}

// ── Formula bounds ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn completeness_always_in_bounds(quality in 0.0f64..=1.0, penalty in 0.5f64..=1.0) {
        let c = formula::completeness(quality, penalty);
        prop_assert!((formula::MIN_COMPLETENESS..=1.0).contains(&c));
    }

    #[test]
    fn completeness_monotone_in_quality(q1 in 0.01f64..=1.0, q2 in 0.01f64..=1.0) {
        let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        prop_assert!(formula::completeness(lo, 1.0) <= formula::completeness(hi, 1.0));
    }

    #[test]
    fn mutation_rate_monotone_decreasing(q1 in 0.01f64..=1.0, q2 in 0.01f64..=1.0) {
        let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        prop_assert!(
            formula::mutation_rate(0.001, lo) >= formula::mutation_rate(0.001, hi)
        );
    }
}

// ── Engine determinism and invariants ────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn reconstruction_is_seed_deterministic(
        seed in any::<u64>(),
        quality in 0.05f64..=1.0,
    ) {
        let bio = make_biosignature(quality);
        let a = ReconstructionEngine::new(seed).reconstruct(&bio).unwrap();
        let b = ReconstructionEngine::new(seed).reconstruct(&bio).unwrap();
        prop_assert_eq!(a.id, b.id);
        prop_assert_eq!(a.genes, b.genes);
    }

    #[test]
    fn gene_calls_stay_in_chromosome_range(
        seed in any::<u64>(),
        quality in 0.05f64..=1.0,
    ) {
        let bio = make_biosignature(quality);
        let genome = ReconstructionEngine::new(seed).reconstruct(&bio).unwrap();
        prop_assert!(genome.genes.iter().all(|g| (1..=23).contains(&g.chromosome)));
        prop_assert_eq!(
            genome.gene_count(),
            formula::gene_count(genome.completeness, 25_000)
        );
    }
}
