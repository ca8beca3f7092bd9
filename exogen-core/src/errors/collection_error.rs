/// Biosignature collection errors.
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("recovery quality {quality} out of range (0.0, 1.0]")]
    QualityOutOfRange { quality: f64 },

    #[error("empty planet designation in collection request")]
    EmptyPlanet,

    #[error("analysis method {method} cannot read {origin} samples")]
    IncompatibleMethod { method: String, origin: String },
}
