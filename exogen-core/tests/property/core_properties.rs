use exogen_core::genome::Viability;
use exogen_core::ids;
use exogen_core::models::RunStatistics;
use proptest::prelude::*;

// ── Viability clamping ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn viability_always_in_unit_interval(value in -10.0f64..10.0) {
        let v = Viability::new(value);
        prop_assert!((0.0..=1.0).contains(&v.value()));
    }

    #[test]
    fn viability_multiplication_stays_clamped(
        value in 0.0f64..1.0,
        factor in 0.0f64..5.0,
    ) {
        let v = Viability::new(value) * factor;
        prop_assert!((0.0..=1.0).contains(&v.value()));
    }

    #[test]
    fn viability_thresholds_are_consistent(value in 0.0f64..1.0) {
        let v = Viability::new(value);
        // Implantation-viable implies not below minimum.
        if v.is_implantation_viable() {
            prop_assert!(!v.is_below_minimum());
        }
    }
}

// ── Short ids ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn short_ids_are_deterministic(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(ids::short_id("bio", &input), ids::short_id("bio", &input));
    }

    #[test]
    fn short_ids_have_fixed_shape(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let id = ids::short_id("emb", &input);
        prop_assert!(id.starts_with("emb_"));
        prop_assert_eq!(ids::hex_portion(&id).len(), ids::SHORT_ID_LEN);
    }
}

// ── Statistics merge ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn merge_preserves_counts(
        a_formed in 0u64..100,
        b_formed in 0u64..100,
        a_mean in 0.0f64..1.0,
        b_mean in 0.0f64..1.0,
    ) {
        let mut a = RunStatistics {
            embryos_formed: a_formed,
            mean_viability: a_mean,
            ..Default::default()
        };
        let b = RunStatistics {
            embryos_formed: b_formed,
            mean_viability: b_mean,
            ..Default::default()
        };
        a.merge(&b);
        prop_assert_eq!(a.embryos_formed, a_formed + b_formed);
        // Weighted mean stays within the contributing means.
        if a_formed + b_formed > 0 {
            let lo = a_mean.min(b_mean) - 1e-9;
            let hi = a_mean.max(b_mean) + 1e-9;
            prop_assert!(a.mean_viability >= lo && a.mean_viability <= hi);
        }
    }
}
