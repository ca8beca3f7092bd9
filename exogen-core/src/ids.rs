//! Deterministic short identifiers.
//!
//! Every pipeline product gets a stage-prefixed id whose hex portion is a
//! truncated blake3 hash of its deterministic inputs, so identical runs
//! produce identical ids.

/// Length of the hex portion of a short id.
pub const SHORT_ID_LEN: usize = 8;

/// Build a stage-prefixed short id from arbitrary input bytes.
///
/// `short_id("bio", b"...")` → `"bio_3f1a9c0e"`.
pub fn short_id(prefix: &str, input: &[u8]) -> String {
    let hash = blake3::hash(input);
    let hex = hash.to_hex();
    format!("{}_{}", prefix, &hex.as_str()[..SHORT_ID_LEN])
}

/// The hex portion of a short id (everything after the last underscore).
pub fn hex_portion(id: &str) -> &str {
    id.rsplit('_').next().unwrap_or(id)
}
