use exogen_collection::{CollectionEngine, CollectionRequest};
use exogen_core::models::{AnalysisMethod, SampleOrigin};
use proptest::prelude::*;

fn arb_origin() -> impl Strategy<Value = SampleOrigin> {
    prop_oneof![
        Just(SampleOrigin::Ashes),
        Just(SampleOrigin::MagneticHologram),
    ]
}

proptest! {
    #[test]
    fn collection_is_seed_deterministic(seed in any::<u64>(), origin in arb_origin()) {
        let request =
            CollectionRequest::new("Gliese-667Cc", origin, AnalysisMethod::MagneticResonance);
        let a = CollectionEngine::new(seed).collect(&request).unwrap();
        let b = CollectionEngine::new(seed).collect(&request).unwrap();
        prop_assert_eq!(a.id, b.id);
        prop_assert_eq!(a.markers.karyotype, b.markers.karyotype);
    }

    #[test]
    fn quality_override_in_unit_interval_is_accepted(quality in 0.01f64..=1.0) {
        let request = CollectionRequest::new(
            "Gliese-667Cc",
            SampleOrigin::Ashes,
            AnalysisMethod::Spectrometry,
        )
        .with_quality(quality);
        let bio = CollectionEngine::new(0).collect(&request).unwrap();
        prop_assert_eq!(bio.reconstruction_quality, quality);
    }

    #[test]
    fn panel_always_matches_karyotype(seed in any::<u64>()) {
        let request = CollectionRequest::new(
            "Gliese-667Cc",
            SampleOrigin::Ashes,
            AnalysisMethod::Spectrometry,
        );
        let bio = CollectionEngine::new(seed).collect(&request).unwrap();
        let has_sry = bio.markers.has_marker("SRY");
        match bio.markers.karyotype {
            exogen_core::genome::Karyotype::Xy => prop_assert!(has_sry),
            exogen_core::genome::Karyotype::Xx => prop_assert!(!has_sry),
        }
    }
}
