use crate::errors::ExogenResult;
use crate::models::{DevelopmentReport, Embryo, EnvironmentParams};

/// Day-stepped embryonic development.
pub trait IDevelopmentModel: Send {
    /// Advance the embryo by `days`, mutating it in place.
    ///
    /// When `monitor_anomalies` is set the report carries a per-day timeline.
    fn simulate(
        &mut self,
        embryo: &mut Embryo,
        days: u32,
        monitor_anomalies: bool,
        environment: &EnvironmentParams,
    ) -> ExogenResult<DevelopmentReport>;
}
