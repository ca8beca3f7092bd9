//! Gene-call sampling.

use rand::Rng;

use exogen_core::constants::{HAPLOID_CHROMOSOMES, MAX_GENE_POSITION};
use exogen_core::genome::{Allele, Gene};

/// Allele draw table: bases and indels at 8:1:1 weight.
const ALLELE_TABLE: [Allele; 10] = [
    Allele::A,
    Allele::T,
    Allele::C,
    Allele::G,
    Allele::A,
    Allele::T,
    Allele::C,
    Allele::G,
    Allele::Insertion,
    Allele::Deletion,
];

/// Draw a single gene call.
pub fn sample_gene<R: Rng>(rng: &mut R) -> Gene {
    Gene {
        chromosome: rng.gen_range(1..=HAPLOID_CHROMOSOMES),
        position: rng.gen_range(1..=MAX_GENE_POSITION),
        allele: ALLELE_TABLE[rng.gen_range(0..ALLELE_TABLE.len())],
        expressivity: rng.gen(),
    }
}

/// Draw `count` gene calls.
pub fn sample_genes<R: Rng>(rng: &mut R, count: usize) -> Vec<Gene> {
    (0..count).map(|_| sample_gene(rng)).collect()
}
