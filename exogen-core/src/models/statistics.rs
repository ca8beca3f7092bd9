use serde::{Deserialize, Serialize};

/// Aggregate statistics over one or more crossings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub biosignatures_collected: u64,
    pub genomes_reconstructed: u64,
    pub gametes_developed: u64,
    pub embryos_formed: u64,
    /// Crossings rejected at fertilization (ploidy or viability).
    pub fertilizations_failed: u64,
    /// Mean final viability across formed embryos. 0.0 when none formed.
    pub mean_viability: f64,
}

impl RunStatistics {
    /// Merge another statistics block into this one.
    ///
    /// Mean viability is recombined weighted by embryo counts.
    pub fn merge(&mut self, other: &RunStatistics) {
        let total_embryos = self.embryos_formed + other.embryos_formed;
        if total_embryos > 0 {
            self.mean_viability = (self.mean_viability * self.embryos_formed as f64
                + other.mean_viability * other.embryos_formed as f64)
                / total_embryos as f64;
        }
        self.biosignatures_collected += other.biosignatures_collected;
        self.genomes_reconstructed += other.genomes_reconstructed;
        self.gametes_developed += other.gametes_developed;
        self.embryos_formed += other.embryos_formed;
        self.fertilizations_failed += other.fertilizations_failed;
    }
}
