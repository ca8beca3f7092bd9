//! Mendelian genotype combination.

use std::collections::BTreeMap;

use rand::Rng;

use exogen_core::constants::HAPLOID_CHROMOSOMES;
use exogen_core::genome::Allele;
use exogen_core::models::ArtificialGamete;

/// Combine two gametes into a genotype.
///
/// For each chromosome both gametes populate, loci are paired index-wise up
/// to the shorter gene list; each locus takes the paternal allele with
/// p = 0.5, otherwise the maternal one. Keys are `gene_{chromosome}_{index}`.
pub fn combine_genotype<R: Rng>(
    rng: &mut R,
    paternal: &ArtificialGamete,
    maternal: &ArtificialGamete,
) -> BTreeMap<String, Allele> {
    let mut genotype = BTreeMap::new();

    for chromosome in 1..=HAPLOID_CHROMOSOMES {
        let (Some(paternal_genes), Some(maternal_genes)) = (
            paternal.chromosomes.get(&chromosome),
            maternal.chromosomes.get(&chromosome),
        ) else {
            continue;
        };

        let loci = paternal_genes.len().min(maternal_genes.len());
        for i in 0..loci {
            let allele = if rng.gen_bool(0.5) {
                paternal_genes[i].allele
            } else {
                maternal_genes[i].allele
            };
            genotype.insert(format!("gene_{}_{}", chromosome, i), allele);
        }
    }

    genotype
}
