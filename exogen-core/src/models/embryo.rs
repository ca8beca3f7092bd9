use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::genome::{Allele, Viability};

/// Stage a pipeline product is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentalState {
    Biosignature,
    ReconstructedGenome,
    ArtificialGamete,
    EmbryoFormed,
    Developing,
}

/// Category of a detected anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Chromosome count deviation detected at fertilization.
    Aneuploidy,
    /// Recessive mutation expressed at fertilization.
    ExpressedRecessiveMutation,
    /// Division slowdown detected during development.
    DevelopmentalArrest,
}

/// A detected anomaly with the day it appeared.
/// Fertilization-time anomalies carry day 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub detected_on_day: u32,
}

/// An embryo formed by artificial fertilization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embryo {
    /// Identifier built from both gamete ids, `emb_` prefix.
    pub id: String,
    /// Current stage.
    pub state: DevelopmentalState,
    /// Days of development completed.
    pub developmental_day: u32,
    /// Total cell count. 1 at fertilization, capped at the blastocyst limit.
    pub total_cells: u64,
    /// Per-day cell multiplication factor. Drops to 1.0 at the blastocyst cap.
    pub division_rate: f64,
    /// Overall viability. Monotonically non-increasing after fertilization.
    pub viability: Viability,
    /// Anomalies detected so far, in detection order.
    pub anomalies: Vec<Anomaly>,
    /// Combined genotype, keyed `gene_{chromosome}_{index}`.
    /// BTreeMap so serialization and comparison are deterministic.
    pub genotype: BTreeMap<String, Allele>,
}

impl Embryo {
    /// blake3 hash of the serialized genotype, for dedup across runs.
    pub fn genotype_hash(&self) -> crate::errors::ExogenResult<String> {
        let serialized = serde_json::to_vec(&self.genotype)?;
        Ok(blake3::hash(&serialized).to_hex().to_string())
    }

    /// Whether the embryo has reached the blastocyst cell cap.
    pub fn is_blastocyst(&self) -> bool {
        self.total_cells >= crate::constants::BLASTOCYST_CELL_CAP
    }

    /// Anomalies of the given kind.
    pub fn anomalies_of_kind(&self, kind: AnomalyKind) -> usize {
        self.anomalies.iter().filter(|a| a.kind == kind).count()
    }

    /// Whether an anomaly was already recorded on the given day.
    pub fn has_anomaly_on_day(&self, day: u32) -> bool {
        self.anomalies.iter().any(|a| a.detected_on_day == day)
    }
}
