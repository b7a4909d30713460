//! Coordinate store: per-axis voxel center sequences.
//!
//! Voxel `i` is the `i`-th record read, and its coordinates sit at index `i`
//! of all three axis sequences.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecordFault, Result, VoxelError};

/// One of the three orthogonal anatomical axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Right-left (first column).
    RightLeft,
    /// Foot-head (second column).
    FootHead,
    /// Anterior-posterior (third column).
    AnteriorPosterior,
}

impl Axis {
    /// All axes in column order.
    pub const ALL: [Axis; 3] = [Axis::RightLeft, Axis::FootHead, Axis::AnteriorPosterior];

    /// Short label (`rl`, `fh`, `ap`).
    pub fn label(self) -> &'static str {
        match self {
            Axis::RightLeft => "rl",
            Axis::FootHead => "fh",
            Axis::AnteriorPosterior => "ap",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable voxel coordinates, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateStore {
    rl: Vec<f64>,
    fh: Vec<f64>,
    ap: Vec<f64>,
}

impl CoordinateStore {
    /// Build a store from textual records, one voxel per record.
    ///
    /// Each record must hold exactly three comma-separated finite numbers;
    /// whitespace around each field is ignored. The first bad record aborts
    /// the load with [`VoxelError::MalformedRecord`].
    pub fn load<I, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        for (idx, record) in records.into_iter().enumerate() {
            let [rl, fh, ap] = parse_record(record.as_ref(), idx + 1)?;
            store.rl.push(rl);
            store.fh.push(fh);
            store.ap.push(ap);
        }
        Ok(store)
    }

    /// Parse the whole contents of a coordinate file.
    pub fn parse(text: &str) -> Result<Self> {
        Self::load(text.lines())
    }

    /// Build a store from numeric triples.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let mut store = Self::default();
        for [rl, fh, ap] in triples {
            store.rl.push(rl);
            store.fh.push(fh);
            store.ap.push(ap);
        }
        store
    }

    /// Number of voxels.
    pub fn size(&self) -> usize {
        self.rl.len()
    }

    /// True if the store holds no voxels.
    pub fn is_empty(&self) -> bool {
        self.rl.is_empty()
    }

    /// Coordinate sequence for one axis, in load order.
    pub fn axis_values(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::RightLeft => &self.rl,
            Axis::FootHead => &self.fh,
            Axis::AnteriorPosterior => &self.ap,
        }
    }

    /// Coordinates of voxel `id`.
    pub fn voxel(&self, id: usize) -> Option<[f64; 3]> {
        Some([*self.rl.get(id)?, *self.fh.get(id)?, *self.ap.get(id)?])
    }

    /// Iterate voxels as `[rl, fh, ap]` triples.
    pub fn iter(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.rl
            .iter()
            .zip(&self.fh)
            .zip(&self.ap)
            .map(|((&rl, &fh), &ap)| [rl, fh, ap])
    }
}

/// Read a coordinate file from disk.
///
/// A missing file is reported as [`VoxelError::FileNotFound`] so callers can
/// tell it apart from unreadable or malformed input.
pub fn read_coordinates(path: impl AsRef<Path>) -> Result<CoordinateStore> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => VoxelError::FileNotFound(path.to_path_buf()),
        _ => VoxelError::Io(err),
    })?;
    let store = CoordinateStore::parse(&text)?;
    tracing::debug!(path = %path.display(), voxels = store.size(), "loaded coordinates");
    Ok(store)
}

fn parse_record(record: &str, line: usize) -> Result<[f64; 3]> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        let found = if record.trim().is_empty() { 0 } else { fields.len() };
        return Err(VoxelError::malformed(line, RecordFault::FieldCount(found), record));
    }

    let mut out = [0.0; 3];
    for (idx, field) in fields.iter().enumerate() {
        // Coordinates are single precision; widening to f64 is exact.
        out[idx] = field
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(f64::from)
            .ok_or_else(|| VoxelError::malformed(line, RecordFault::InvalidNumber(idx), record))?;
    }
    Ok(out)
}
