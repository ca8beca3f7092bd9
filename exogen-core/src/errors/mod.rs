pub mod collection_error;
pub mod development_error;
pub mod fertilization_error;
pub mod gametogenesis_error;
pub mod reconstruction_error;

pub use collection_error::CollectionError;
pub use development_error::DevelopmentError;
pub use fertilization_error::FertilizationError;
pub use gametogenesis_error::GametogenesisError;
pub use reconstruction_error::ReconstructionError;

/// Umbrella error for the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExogenError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Reconstruction(#[from] ReconstructionError),

    #[error(transparent)]
    Gametogenesis(#[from] GametogenesisError),

    #[error(transparent)]
    Fertilization(#[from] FertilizationError),

    #[error(transparent)]
    Development(#[from] DevelopmentError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type ExogenResult<T> = Result<T, ExogenError>;
