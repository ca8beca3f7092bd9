//! Seed derivation.
//!
//! Every stage engine gets its own PRNG seeded from the master seed and a
//! stage tag, so stages stay reproducible even if one of them changes how
//! much randomness it consumes.

/// Stage tags.
pub mod tags {
    pub const COLLECTION: &str = "collection";
    pub const RECONSTRUCTION: &str = "reconstruction";
    pub const GAMETOGENESIS: &str = "gametogenesis";
    pub const FERTILIZATION: &str = "fertilization";
    pub const DEVELOPMENT: &str = "development";
}

/// Derive a stage seed from the master seed and a tag.
pub fn derive(master: u64, tag: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&master.to_le_bytes());
    hasher.update(tag.as_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Derive the master seed for one cohort member.
pub fn derive_indexed(master: u64, index: u64) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&master.to_le_bytes());
    hasher.update(b"cohort");
    hasher.update(&index.to_le_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
