//! Boundary-surface estimation.
//!
//! Each aligned position of the three boundary lists is treated as a box
//! whose extents are the absolute boundary coordinates, and the box surface
//! areas are summed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::boundary::{detect_boundaries, BoundaryCounts};
use crate::error::{Result, VoxelError};
use crate::report::SurfaceReport;
use crate::store::CoordinateStore;

/// How the three independently sized boundary lists are paired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPolicy {
    /// Sum over the shortest list's length.
    #[default]
    Shortest,
    /// Require all three lists to have the same length.
    Strict,
    /// Sum over the right-left list's length; the other lists must be at
    /// least that long and any excess is ignored.
    LeadingAxis,
}

impl AlignmentPolicy {
    /// Number of positions to sum for the given boundary counts.
    pub fn bound(self, counts: BoundaryCounts) -> Result<usize> {
        let misaligned = || VoxelError::MisalignedBoundaries {
            rl: counts.rl,
            fh: counts.fh,
            ap: counts.ap,
        };
        match self {
            Self::Shortest => Ok(counts.min()),
            Self::Strict if counts.is_aligned() => Ok(counts.rl),
            Self::Strict => Err(misaligned()),
            Self::LeadingAxis if counts.fh >= counts.rl && counts.ap >= counts.rl => Ok(counts.rl),
            Self::LeadingAxis => Err(misaligned()),
        }
    }

    /// Name as used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::Strict => "strict",
            Self::LeadingAxis => "leading-axis",
        }
    }
}

impl FromStr for AlignmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shortest" => Ok(Self::Shortest),
            "strict" => Ok(Self::Strict),
            "leading-axis" => Ok(Self::LeadingAxis),
            other => Err(format!(
                "unknown alignment policy '{}' (expected shortest, strict or leading-axis)",
                other
            )),
        }
    }
}

impl std::fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with a store that holds no voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyInputPolicy {
    /// Report an area of `0.0`.
    #[default]
    Zero,
    /// Fail with [`VoxelError::EmptyStore`].
    Reject,
}

/// Estimation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateSettings {
    /// Pairing of the per-axis boundary lists.
    pub alignment: AlignmentPolicy,
    /// Neighbor match tolerance. `0.0` compares coordinates exactly.
    pub neighbor_tolerance: f64,
    /// Handling of an empty store.
    pub empty_input: EmptyInputPolicy,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            alignment: AlignmentPolicy::Shortest,
            neighbor_tolerance: 0.0,
            empty_input: EmptyInputPolicy::Zero,
        }
    }
}

impl EstimateSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        let tol = self.neighbor_tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(VoxelError::InvalidSettings(
                "neighbor_tolerance must be a finite, non-negative number".into(),
            ));
        }
        // At 0.5 the window around value-1 and value+1 reaches the midpoint
        // between grid cells.
        if tol >= 0.5 {
            return Err(VoxelError::InvalidSettings(
                "neighbor_tolerance must be below 0.5".into(),
            ));
        }
        Ok(())
    }
}

/// Surface area of a box with the given extents, taken as absolute values.
pub fn box_surface(x: f64, y: f64, z: f64) -> f64 {
    let (x, y, z) = (x.abs(), y.abs(), z.abs());
    2.0 * (x * y + y * z + x * z)
}

/// Boundary-surface estimator.
#[derive(Debug, Clone, Default)]
pub struct SurfaceEstimator {
    settings: EstimateSettings,
}

impl SurfaceEstimator {
    /// Create an estimator with the given settings.
    pub fn new(settings: EstimateSettings) -> Self {
        Self { settings }
    }

    /// Estimate the surface area of the voxels in `store`.
    ///
    /// This:
    /// 1. Detects boundary values independently on each axis
    /// 2. Picks the summation bound from the alignment policy
    /// 3. Sums the box surface of each aligned `(rl, fh, ap)` position
    pub fn estimate(&self, store: &CoordinateStore) -> Result<SurfaceReport> {
        self.settings.validate()?;

        if store.is_empty() && self.settings.empty_input == EmptyInputPolicy::Reject {
            return Err(VoxelError::EmptyStore);
        }

        let boundaries = detect_boundaries(store, self.settings.neighbor_tolerance);
        let counts = boundaries.counts();
        let alignment = self.settings.alignment;
        if !counts.is_aligned() {
            warn!(
                rl = counts.rl,
                fh = counts.fh,
                ap = counts.ap,
                policy = %alignment,
                "boundary counts differ between axes"
            );
        }

        let bound = alignment.bound(counts)?;
        let area = boundaries
            .aligned(bound)
            .fold(0.0, |acc, [x, y, z]| acc + box_surface(x, y, z));

        info!(voxels = store.size(), boxes = bound, area, "estimated surface area");

        Ok(SurfaceReport {
            voxel_count: store.size(),
            boundary_counts: counts,
            boxes_summed: bound,
            alignment,
            area,
        })
    }
}

/// Estimate the surface area of `store` with default settings.
///
/// An empty store yields `0.0`.
pub fn estimate_surface_area(store: &CoordinateStore) -> Result<f64> {
    SurfaceEstimator::default()
        .estimate(store)
        .map(|report| report.area)
}
