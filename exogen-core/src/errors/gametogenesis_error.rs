/// Artificial gametogenesis errors.
#[derive(Debug, thiserror::Error)]
pub enum GametogenesisError {
    #[error("genome {genome_id} has no recovered genes to recombine")]
    EmptyGenome { genome_id: String },
}
