pub mod assessment;
pub mod biosignature;
pub mod embryo;
pub mod environment;
pub mod gamete;
pub mod report;
pub mod statistics;

pub use assessment::{ViabilityAssessment, ViabilityClass};
pub use biosignature::{AnalysisMethod, Biosignature, MarkerProfile, SampleOrigin};
pub use embryo::{Anomaly, AnomalyKind, DevelopmentalState, Embryo};
pub use environment::EnvironmentParams;
pub use gamete::ArtificialGamete;
pub use report::{CrossingOutcome, DaySnapshot, DevelopmentReport};
pub use statistics::RunStatistics;
