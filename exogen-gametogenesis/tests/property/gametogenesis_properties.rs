use exogen_core::genome::{Allele, Gene, Karyotype, ReconstructedGenome};
use exogen_gametogenesis::GametogenesisEngine;
use proptest::prelude::*;

fn make_genome(gene_count: usize, quality: f64) -> ReconstructedGenome {
    let genes = (0..gene_count)
        .map(|i| Gene {
            chromosome: (i % 23 + 1) as u8,
            position: (i + 1) as u32,
            allele: Allele::C,
            expressivity: 0.5,
        })
        .collect();
    ReconstructedGenome {
        id: "gen_prop0000".to_string(),
        karyotype: Karyotype::Xy,
        completeness: 1.0,
        genes,
        mutation_rate: 0.0,
        sequencing_quality: quality,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn gametes_are_always_haploid(
        seed in any::<u64>(),
        gene_count in 23usize..5_000,
        quality in 0.1f64..=1.0,
    ) {
        let genome = make_genome(gene_count, quality);
        let gamete = GametogenesisEngine::new(seed).develop_gamete(&genome).unwrap();
        prop_assert_eq!(gamete.ploidy, 23);
        prop_assert!(gamete.chromosomes.keys().all(|c| (1..=23).contains(c)));
    }

    #[test]
    fn per_chromosome_sample_never_exceeds_available(
        seed in any::<u64>(),
        gene_count in 23usize..5_000,
    ) {
        let genome = make_genome(gene_count, 0.7);
        let gamete = GametogenesisEngine::new(seed).develop_gamete(&genome).unwrap();
        for (chromosome, genes) in &gamete.chromosomes {
            let available = genome.genes_on_chromosome(*chromosome).count();
            prop_assert!(genes.len() <= available);
            prop_assert!(genes.len() <= 200);
        }
    }

    #[test]
    fn viability_bounded_by_quality_mix(
        seed in any::<u64>(),
        quality in 0.0f64..=1.0,
    ) {
        let genome = make_genome(2_300, quality);
        let gamete = GametogenesisEngine::new(seed).develop_gamete(&genome).unwrap();
        let v = gamete.viability.value();
        // quality*0.7 <= v < quality*0.7 + 0.3.
        prop_assert!(v >= quality * 0.7 - 1e-9);
        prop_assert!(v < quality * 0.7 + 0.3 + 1e-9);
    }
}
