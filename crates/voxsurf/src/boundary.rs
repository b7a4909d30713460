//! Per-axis boundary detection.
//!
//! A voxel is a boundary voxel on an axis when its coordinate on that axis
//! lacks an occupied neighbor at `value - 1` or at `value + 1`, looking only at
//! the values recorded on that same axis. The three axes are tested
//! independently; no joint 3D adjacency is considered.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{Axis, CoordinateStore};

/// Membership index over one axis's coordinate values.
///
/// Neighbor arithmetic runs in single precision: coordinates are read as
/// `f32`, and `value - 1` must land on the exact `f32` bit pattern of a
/// recorded value. Bit patterns are compared as-is, so `-0.0` and `0.0` are
/// distinct.
#[derive(Debug, Clone)]
enum NeighborLookup {
    /// Exact equality on the `f32` bit pattern.
    Exact(HashSet<u32>),
    /// Any value within `tolerance` counts as a match.
    Tolerant { sorted: Vec<f64>, tolerance: f64 },
}

impl NeighborLookup {
    fn build(values: &[f64], tolerance: f64) -> Self {
        if tolerance > 0.0 {
            let mut sorted = values.to_vec();
            sorted.sort_by(f64::total_cmp);
            Self::Tolerant { sorted, tolerance }
        } else {
            Self::Exact(values.iter().map(|&v| single(v).to_bits()).collect())
        }
    }

    fn contains(&self, value: f32) -> bool {
        match self {
            Self::Exact(set) => set.contains(&value.to_bits()),
            Self::Tolerant { sorted, tolerance } => {
                let value = f64::from(value);
                let lo = sorted.partition_point(|&v| v < value - tolerance);
                sorted.get(lo).is_some_and(|&v| v <= value + tolerance)
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn single(value: f64) -> f32 {
    value as f32
}

/// Boundary values of a single axis, in input order.
///
/// `tolerance == 0.0` selects exact neighbor equality.
pub fn axis_boundary(values: &[f64], tolerance: f64) -> Vec<f64> {
    let lookup = NeighborLookup::build(values, tolerance);
    values
        .iter()
        .copied()
        .filter(|&v| {
            let v = single(v);
            !lookup.contains(v - 1.0) || !lookup.contains(v + 1.0)
        })
        .collect()
}

/// Number of boundary values found on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryCounts {
    /// Right-left count.
    pub rl: usize,
    /// Foot-head count.
    pub fh: usize,
    /// Anterior-posterior count.
    pub ap: usize,
}

impl BoundaryCounts {
    /// Smallest of the three counts.
    pub fn min(&self) -> usize {
        self.rl.min(self.fh).min(self.ap)
    }

    /// True when all three axes found the same number of boundary values.
    pub fn is_aligned(&self) -> bool {
        self.rl == self.fh && self.fh == self.ap
    }
}

/// Combined boundary lists for all three axes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLists {
    rl: Vec<f64>,
    fh: Vec<f64>,
    ap: Vec<f64>,
}

impl BoundaryLists {
    /// Boundary values of one axis.
    pub fn get(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::RightLeft => &self.rl,
            Axis::FootHead => &self.fh,
            Axis::AnteriorPosterior => &self.ap,
        }
    }

    /// Boundary count of one axis.
    pub fn len(&self, axis: Axis) -> usize {
        self.get(axis).len()
    }

    /// Counts for all three axes.
    pub fn counts(&self) -> BoundaryCounts {
        BoundaryCounts {
            rl: self.rl.len(),
            fh: self.fh.len(),
            ap: self.ap.len(),
        }
    }

    /// Iterate the first `bound` positions as `[rl, fh, ap]` triples.
    ///
    /// Stops early if any list is shorter than `bound`.
    pub fn aligned(&self, bound: usize) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.rl
            .iter()
            .zip(&self.fh)
            .zip(&self.ap)
            .take(bound)
            .map(|((&x, &y), &z)| [x, y, z])
    }
}

/// Run boundary detection on every axis of `store`.
pub fn detect_boundaries(store: &CoordinateStore, tolerance: f64) -> BoundaryLists {
    let mode = if tolerance > 0.0 { "tolerant" } else { "exact" };
    let [rl, fh, ap] = Axis::ALL.map(|axis| {
        let values = axis_boundary(store.axis_values(axis), tolerance);
        debug!(axis = %axis, boundary = values.len(), voxels = store.size(), mode, "axis boundary");
        values
    });
    BoundaryLists { rl, fh, ap }
}
