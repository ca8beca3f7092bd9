/// Genome reconstruction errors.
#[derive(Debug, thiserror::Error)]
pub enum ReconstructionError {
    #[error("biosignature {biosignature_id} has an empty marker panel; marker-guided reconstruction needs at least one marker")]
    EmptyMarkerPanel { biosignature_id: String },

    #[error("biosignature {biosignature_id} carries no recoverable signal (quality {quality})")]
    NoRecoverableSignal { biosignature_id: String, quality: f64 },
}
