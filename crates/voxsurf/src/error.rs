//! Error types for coordinate loading and surface estimation.

use std::path::PathBuf;

use thiserror::Error;

/// Why a coordinate record was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFault {
    /// The record did not split into exactly three fields.
    FieldCount(usize),
    /// Field at this position (0-based) is not a finite real number.
    InvalidNumber(usize),
}

impl std::fmt::Display for RecordFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 3 fields, found {}", n),
            Self::InvalidNumber(idx) => write!(f, "field {} is not a finite number", idx + 1),
        }
    }
}

/// Errors that can occur while loading coordinates or estimating area.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// Input file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A coordinate record could not be parsed.
    #[error("malformed record at line {line}: {fault} ({record:?})")]
    MalformedRecord {
        /// Line number (1-indexed).
        line: usize,
        /// What was wrong with the record.
        fault: RecordFault,
        /// The offending record text.
        record: String,
    },

    /// Store holds no voxels and the empty-input policy rejects that.
    #[error("coordinate store is empty")]
    EmptyStore,

    /// Per-axis boundary lists cannot be aligned under the chosen policy.
    #[error("boundary lists are misaligned (rl={rl}, fh={fh}, ap={ap})")]
    MisalignedBoundaries {
        /// Right-left boundary count.
        rl: usize,
        /// Foot-head boundary count.
        fh: usize,
        /// Anterior-posterior boundary count.
        ap: usize,
    },

    /// Estimation settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl VoxelError {
    /// Create a malformed-record error.
    pub fn malformed(line: usize, fault: RecordFault, record: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            fault,
            record: record.into(),
        }
    }

    /// Returns true for the missing-input condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound(_))
    }
}

/// Result type for voxel surface operations.
pub type Result<T> = std::result::Result<T, VoxelError>;
