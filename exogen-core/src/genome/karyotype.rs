use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex-chromosome karyotype inferred from a biosignature's marker panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Karyotype {
    /// XY — paternal-line contributor.
    Xy,
    /// XX — maternal-line contributor.
    Xx,
}

impl Karyotype {
    /// Sex chromosomes carried by this karyotype.
    pub fn sex_chromosomes(self) -> [&'static str; 2] {
        match self {
            Karyotype::Xy => ["X", "Y"],
            Karyotype::Xx => ["X", "X"],
        }
    }
}

impl fmt::Display for Karyotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Karyotype::Xy => write!(f, "XY"),
            Karyotype::Xx => write!(f, "XX"),
        }
    }
}
