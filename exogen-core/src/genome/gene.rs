use serde::{Deserialize, Serialize};

use super::allele::Allele;

/// A single reconstructed gene call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Chromosome number, 1..=23.
    pub chromosome: u8,
    /// Position on the chromosome, 1..=1_000_000.
    pub position: u32,
    /// The called allele.
    pub allele: Allele,
    /// Expression strength, [0.0, 1.0).
    pub expressivity: f64,
}
