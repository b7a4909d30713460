//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;
use voxsurf::AlignmentPolicy;

#[derive(Parser, Debug)]
#[command(name = "voxsurf")]
#[command(version, about = "Estimate surface area from voxel coordinates", long_about = None)]
pub struct Cli {
    /// Coordinate file, one "rl, fh, ap" triple per line (default: placenta.txt)
    pub input: Option<PathBuf>,

    /// TOML config file (default: voxsurf.toml if present)
    #[arg(long, env = "VOXSURF_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to pair per-axis boundary lists: shortest, strict, leading-axis
    #[arg(long)]
    pub alignment: Option<AlignmentPolicy>,

    /// Neighbor match tolerance (0 = exact)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Fail instead of reporting 0.0 for an empty input
    #[arg(long)]
    pub reject_empty: bool,

    /// Exit with an error when the input file is missing
    #[arg(long)]
    pub strict_missing: bool,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
