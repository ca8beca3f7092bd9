/// Embryonic development errors.
#[derive(Debug, thiserror::Error)]
pub enum DevelopmentError {
    #[error("embryo {embryo_id} is non-viable (viability {viability:.3}); development cannot start")]
    NonViableEmbryo { embryo_id: String, viability: f64 },

    #[error("development run of 0 days requested for embryo {embryo_id}")]
    ZeroDayRun { embryo_id: String },
}
