//! Default values for all config structs, in one place.

/// Default PRNG seed.
pub const DEFAULT_SEED: u64 = 0;

/// Default recovery quality of ash samples.
pub const DEFAULT_ASH_QUALITY: f64 = 0.7;
/// Default recovery quality of magnetic-hologram samples.
pub const DEFAULT_HOLOGRAM_QUALITY: f64 = 0.6;

/// Default per-locus base mutation rate.
pub const DEFAULT_BASE_MUTATION_RATE: f64 = 0.001;
/// Default reference gene pool size.
pub const DEFAULT_GENE_POOL_SIZE: usize = crate::constants::GENE_POOL_SIZE;
/// Completeness penalty applied by de novo reconstruction.
pub const DEFAULT_DE_NOVO_PENALTY: f64 = 0.9;

/// Viability below which a formed embryo is rejected.
pub const DEFAULT_MINIMUM_VIABILITY: f64 = 0.3;
/// Minimum genes sampled per chromosome during meiosis.
pub const DEFAULT_MEIOSIS_MIN_SAMPLE: usize = 50;
/// Maximum genes sampled per chromosome during meiosis.
pub const DEFAULT_MEIOSIS_MAX_SAMPLE: usize = 200;
/// Base aneuploidy probability at fertilization.
pub const DEFAULT_ANEUPLOIDY_RATE: f64 = 0.1;
/// Base expressed-recessive-mutation probability at fertilization.
pub const DEFAULT_RECESSIVE_EXPRESSION_RATE: f64 = 0.05;
/// Viability fraction lost per fertilization anomaly.
pub const DEFAULT_ANOMALY_VIABILITY_PENALTY: f64 = 0.2;

/// Base daily anomaly probability during development.
pub const DEFAULT_DAILY_ANOMALY_RATE: f64 = 0.05;
/// Viability multiplier applied when a development anomaly appears.
pub const DEFAULT_ANOMALY_VIABILITY_FACTOR: f64 = 0.9;
/// Cell cap marking the blastocyst stage.
pub const DEFAULT_BLASTOCYST_CELL_CAP: u64 = crate::constants::BLASTOCYST_CELL_CAP;
