use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use exogen_core::config::DevelopmentConfig;
use exogen_core::errors::{DevelopmentError, ExogenResult};
use exogen_core::genome::Viability;
use exogen_core::models::{
    Anomaly, AnomalyKind, DaySnapshot, DevelopmentReport, DevelopmentalState, Embryo,
    EnvironmentParams,
};
use exogen_core::traits::IDevelopmentModel;

/// Day-stepped development engine.
pub struct DevelopmentEngine {
    config: DevelopmentConfig,
    rng: StdRng,
}

impl DevelopmentEngine {
    /// Engine with default config.
    pub fn new(seed: u64) -> Self {
        Self::with_config(DevelopmentConfig::default(), seed)
    }

    /// Engine with explicit config.
    pub fn with_config(config: DevelopmentConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One day of development. Returns the anomaly if one appeared.
    fn step_day(&mut self, embryo: &mut Embryo, env: &EnvironmentParams) -> Option<Anomaly> {
        embryo.developmental_day += 1;

        let step = crate::growth::grow(
            embryo.total_cells,
            embryo.division_rate,
            self.config.blastocyst_cell_cap,
        );
        embryo.total_cells = step.total_cells;
        if step.at_cap {
            embryo.division_rate = 1.0;
        }

        let pressure = self.config.daily_anomaly_rate
            * (1.0 - embryo.viability.value())
            * env.anomaly_pressure();
        if self.rng.gen::<f64>() < pressure
            && !embryo.has_anomaly_on_day(embryo.developmental_day)
        {
            let anomaly = Anomaly {
                kind: AnomalyKind::DevelopmentalArrest,
                detected_on_day: embryo.developmental_day,
            };
            embryo.anomalies.push(anomaly);
            embryo.viability =
                Viability::new(embryo.viability.value() * self.config.anomaly_viability_factor);
            debug!(
                embryo_id = %embryo.id,
                day = embryo.developmental_day,
                viability = embryo.viability.value(),
                "development anomaly"
            );
            return Some(anomaly);
        }
        None
    }
}

impl IDevelopmentModel for DevelopmentEngine {
    fn simulate(
        &mut self,
        embryo: &mut Embryo,
        days: u32,
        monitor_anomalies: bool,
        environment: &EnvironmentParams,
    ) -> ExogenResult<DevelopmentReport> {
        if days == 0 {
            return Err(DevelopmentError::ZeroDayRun {
                embryo_id: embryo.id.clone(),
            }
            .into());
        }
        if embryo.viability.is_below_minimum() {
            return Err(DevelopmentError::NonViableEmbryo {
                embryo_id: embryo.id.clone(),
                viability: embryo.viability.value(),
            }
            .into());
        }

        embryo.state = DevelopmentalState::Developing;
        let mut snapshots = Vec::new();
        let mut anomalies_detected = 0u32;

        for _ in 0..days {
            let anomaly = self.step_day(embryo, environment);
            if anomaly.is_some() {
                anomalies_detected += 1;
            }
            if monitor_anomalies {
                snapshots.push(DaySnapshot {
                    day: embryo.developmental_day,
                    total_cells: embryo.total_cells,
                    viability: embryo.viability.value(),
                    new_anomaly: anomaly.is_some(),
                });
            }
        }

        Ok(DevelopmentReport {
            embryo_id: embryo.id.clone(),
            days_simulated: days,
            reached_blastocyst: embryo.is_blastocyst(),
            anomalies_detected,
            snapshots,
        })
    }
}
