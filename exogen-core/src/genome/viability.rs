use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Viability score clamped to [0.0, 1.0].
/// Represents how likely a biological stage product is to survive the next stage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Viability(f64);

impl Viability {
    /// Implantation threshold — embryos at or above this are viable for implantation.
    pub const IMPLANTATION: f64 = 0.5;
    /// Minimum threshold — products below this are discarded by the pipeline.
    pub const MINIMUM: f64 = 0.3;

    /// Create a new Viability, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if viability is at or above the implantation threshold.
    pub fn is_implantation_viable(self) -> bool {
        self.0 >= Self::IMPLANTATION
    }

    /// Check if viability is below the minimum threshold.
    pub fn is_below_minimum(self) -> bool {
        self.0 < Self::MINIMUM
    }
}

impl Default for Viability {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Viability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Viability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Viability> for f64 {
    fn from(v: Viability) -> Self {
        v.0
    }
}

impl Add for Viability {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Viability {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for Viability {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
