//! Aggregation helpers over crossing results.

use exogen_core::models::{Embryo, RunStatistics};

/// Build statistics for a set of formed embryos plus failure counts.
pub fn aggregate(embryos: &[Embryo], fertilizations_failed: u64) -> RunStatistics {
    let mean_viability = if embryos.is_empty() {
        0.0
    } else {
        embryos.iter().map(|e| e.viability.value()).sum::<f64>() / embryos.len() as f64
    };

    RunStatistics {
        // One biosignature and one genome per gamete, two gametes per crossing.
        biosignatures_collected: (embryos.len() as u64 + fertilizations_failed) * 2,
        genomes_reconstructed: (embryos.len() as u64 + fertilizations_failed) * 2,
        gametes_developed: (embryos.len() as u64 + fertilizations_failed) * 2,
        embryos_formed: embryos.len() as u64,
        fertilizations_failed,
        mean_viability,
    }
}
