//! Chromosome partition and recombination sampling.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use exogen_core::constants::HAPLOID_CHROMOSOMES;
use exogen_core::genome::{Gene, ReconstructedGenome};

/// Partition a genome's genes by chromosome number.
pub fn partition_by_chromosome(genome: &ReconstructedGenome) -> BTreeMap<u8, Vec<Gene>> {
    let mut partition: BTreeMap<u8, Vec<Gene>> = BTreeMap::new();
    for gene in &genome.genes {
        partition.entry(gene.chromosome).or_default().push(gene.clone());
    }
    partition
}

/// Sample a recombined gene subset for each populated chromosome.
///
/// Each chromosome contributes `min(available, uniform min..=max)` genes,
/// drawn without replacement. Chromosomes with no recovered genes are
/// absent from the result.
pub fn recombine<R: Rng>(
    rng: &mut R,
    partition: &BTreeMap<u8, Vec<Gene>>,
    min_sample: usize,
    max_sample: usize,
) -> BTreeMap<u8, Vec<Gene>> {
    let mut chromosomes = BTreeMap::new();
    for chromosome in 1..=HAPLOID_CHROMOSOMES {
        let Some(genes) = partition.get(&chromosome) else {
            continue;
        };
        if genes.is_empty() {
            continue;
        }
        let target = rng.gen_range(min_sample..=max_sample);
        let take = target.min(genes.len());
        let selected: Vec<Gene> = genes
            .choose_multiple(rng, take)
            .cloned()
            .collect();
        chromosomes.insert(chromosome, selected);
    }
    chromosomes
}
