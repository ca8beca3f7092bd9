pub mod development_model;
pub mod reconstructor;
pub mod viability_scorer;

pub use development_model::IDevelopmentModel;
pub use reconstructor::IReconstructor;
pub use viability_scorer::IViabilityScorer;
