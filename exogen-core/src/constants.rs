/// Exogen system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of chromosomes in a haploid gamete.
pub const HAPLOID_CHROMOSOMES: u8 = 23;

/// Size of the gene pool a fully reconstructed genome draws from.
pub const GENE_POOL_SIZE: usize = 25_000;

/// Maximum chromosomal position sampled during reconstruction.
pub const MAX_GENE_POSITION: u32 = 1_000_000;

/// Cell count at which an embryo is considered a blastocyst and stops growing.
pub const BLASTOCYST_CELL_CAP: u64 = 1_000_000;

/// Feature flags.
pub const FEATURE_COHORT_SIMULATION: bool = true;
pub const FEATURE_ANOMALY_MONITORING: bool = true;
