pub mod allele;
pub mod gene;
pub mod karyotype;
pub mod reconstructed;
pub mod viability;

pub use allele::Allele;
pub use gene::Gene;
pub use reconstructed::ReconstructedGenome;
pub use karyotype::Karyotype;
pub use viability::Viability;
