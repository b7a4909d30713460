//! Estimation results and their text form.

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryCounts;
use crate::estimate::AlignmentPolicy;

/// Outcome of a surface estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceReport {
    /// Number of voxels in the store.
    pub voxel_count: usize,
    /// Boundary values found per axis.
    pub boundary_counts: BoundaryCounts,
    /// Number of aligned positions summed.
    pub boxes_summed: usize,
    /// Policy used to pair the boundary lists.
    pub alignment: AlignmentPolicy,
    /// Estimated surface area.
    pub area: f64,
}

impl std::fmt::Display for SurfaceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_area(self.area))
    }
}

/// Render an area with exactly one digit after the decimal point.
pub fn format_area(area: f64) -> String {
    format!("{:.1}", area)
}
