//! Daily growth step, pure.

/// Result of one day of cell growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthStep {
    /// Cell count after the step (capped).
    pub total_cells: u64,
    /// Whether the cap was hit this step or earlier.
    pub at_cap: bool,
}

/// Advance the cell count by one day.
///
/// Growth is exponential under `division_rate` until the cap; at the cap
/// the count pins and stays pinned. Counts round up: a fractional division
/// still adds a cell, so a single-cell embryo with rate < 2.0 can progress.
pub fn grow(total_cells: u64, division_rate: f64, cell_cap: u64) -> GrowthStep {
    let grown = (total_cells as f64 * division_rate).ceil() as u64;
    if grown >= cell_cap {
        GrowthStep {
            total_cells: cell_cap,
            at_cap: true,
        }
    } else {
        GrowthStep {
            total_cells: grown.max(total_cells),
            at_cap: false,
        }
    }
}
