use serde::{Deserialize, Serialize};

use super::defaults;

/// Reconstruction subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Per-locus mutation rate at zero signal loss.
    pub base_mutation_rate: f64,
    /// Reference gene pool a complete reconstruction draws from.
    pub gene_pool_size: usize,
    /// Completeness penalty factor applied by de novo reconstruction.
    pub de_novo_penalty: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            base_mutation_rate: defaults::DEFAULT_BASE_MUTATION_RATE,
            gene_pool_size: defaults::DEFAULT_GENE_POOL_SIZE,
            de_novo_penalty: defaults::DEFAULT_DE_NOVO_PENALTY,
        }
    }
}
