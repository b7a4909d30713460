#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

//! Surface area estimation for segmented voxel volumes.
//!
//! The input is a list of voxel center coordinates on three orthogonal axes
//! (right-left, foot-head, anterior-posterior). On each axis independently, a
//! voxel is on the boundary when its coordinate has no occupied neighbor one
//! unit below or one unit above. The boundary coordinates of the three axes
//! are then paired up position by position and each triple contributes the
//! surface of a box with those extents.
//!
//! # Example
//!
//! ```
//! use voxsurf::{estimate_surface_area, format_area, CoordinateStore};
//!
//! let store = CoordinateStore::load(["2.0, 3.0, 5.0"])?;
//! let area = estimate_surface_area(&store)?;
//! assert_eq!(format_area(area), "62.0");
//! # Ok::<(), voxsurf::VoxelError>(())
//! ```
//!
//! Each axis is scanned once in input order; the coordinate arrays are never
//! rotated or reordered between passes.

pub mod boundary;
pub mod error;
pub mod estimate;
pub mod report;
pub mod store;

pub use boundary::{axis_boundary, detect_boundaries, BoundaryCounts, BoundaryLists};
pub use error::{RecordFault, Result, VoxelError};
pub use estimate::{
    box_surface, estimate_surface_area, AlignmentPolicy, EmptyInputPolicy, EstimateSettings,
    SurfaceEstimator,
};
pub use report::{format_area, SurfaceReport};
pub use store::{read_coordinates, Axis, CoordinateStore};
