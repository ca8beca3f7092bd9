use serde::{Deserialize, Serialize};
use std::fmt;

/// A reconstructed allele: one of the four bases or a structural variant.
/// Reconstruction samples bases and indels at an 8:1:1 weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allele {
    A,
    T,
    C,
    G,
    Insertion,
    Deletion,
}

impl Allele {
    /// Whether this allele is a structural variant rather than a base call.
    pub fn is_structural(self) -> bool {
        matches!(self, Allele::Insertion | Allele::Deletion)
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allele::A => write!(f, "A"),
            Allele::T => write!(f, "T"),
            Allele::C => write!(f, "C"),
            Allele::G => write!(f, "G"),
            Allele::Insertion => write!(f, "ins"),
            Allele::Deletion => write!(f, "del"),
        }
    }
}
