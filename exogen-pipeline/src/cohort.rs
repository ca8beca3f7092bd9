//! Parallel cohort simulation.

use rayon::prelude::*;

use exogen_core::config::ExogenConfig;
use exogen_core::errors::ExogenResult;
use exogen_core::models::{CrossingOutcome, RunStatistics};

use crate::engine::{CrossingEngine, CrossingRequest};
use crate::seeds;

/// Outcome of a cohort run.
#[derive(Debug)]
pub struct CohortResult {
    /// Per-member outcome, in cohort index order.
    pub outcomes: Vec<ExogenResult<CrossingOutcome>>,
    /// Statistics aggregated across all members.
    pub statistics: RunStatistics,
}

impl CohortResult {
    /// Members that formed and developed an embryo.
    pub fn successes(&self) -> impl Iterator<Item = &CrossingOutcome> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    /// Count of members that formed an implantation-viable embryo.
    pub fn implantation_viable_count(&self) -> usize {
        self.successes()
            .filter(|o| o.assessment.is_implantation_viable())
            .count()
    }
}

/// Run `size` independent crossings in parallel.
///
/// Each member gets its own engine seeded from `(config.seed, index)`, so
/// the result is identical no matter how rayon schedules the work, and
/// identical to running the members sequentially.
pub fn simulate_cohort(
    config: &ExogenConfig,
    request: &CrossingRequest,
    size: u64,
) -> CohortResult {
    let outcomes: Vec<ExogenResult<CrossingOutcome>> = (0..size)
        .into_par_iter()
        .map(|index| {
            let mut member_config = config.clone();
            member_config.seed = seeds::derive_indexed(config.seed, index);
            let mut engine = CrossingEngine::new(member_config)?;
            engine.run_crossing(request)
        })
        .collect();

    // Aggregate sequentially in index order for a deterministic merge.
    let mut statistics = RunStatistics::default();
    for outcome in &outcomes {
        match outcome {
            Ok(o) => statistics.merge(&o.statistics),
            // Fertilization rejects still collected, reconstructed, and
            // developed gametes for both lines.
            Err(exogen_core::ExogenError::Fertilization(_)) => {
                statistics.merge(&RunStatistics {
                    biosignatures_collected: 2,
                    genomes_reconstructed: 2,
                    gametes_developed: 2,
                    fertilizations_failed: 1,
                    ..Default::default()
                });
            }
            Err(_) => {}
        }
    }

    CohortResult {
        outcomes,
        statistics,
    }
}
