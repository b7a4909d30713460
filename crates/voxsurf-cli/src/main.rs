//! voxsurf CLI - surface area from voxel coordinates
//!
//! Reads a coordinate file (by default `placenta.txt` in the working
//! directory) and prints the estimated surface area with one decimal digit.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use voxsurf::{read_coordinates, SurfaceEstimator, SurfaceReport, VoxelError};

mod cli;
mod config;

use cli::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    run(&config, cli.json)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // stdout carries only the result
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

fn run(config: &Config, json: bool) -> Result<()> {
    let store = match read_coordinates(&config.input) {
        Ok(store) => store,
        Err(VoxelError::FileNotFound(path)) if !config.strict_missing => {
            // A missing input is reported but is not a failure.
            warn!(path = %path.display(), "input file not found");
            println!("File not found: {}", path.display());
            return Ok(());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to load {}", config.input.display()));
        }
    };

    let report = SurfaceEstimator::new(config.estimate.clone()).estimate(&store)?;
    let rendered = render(&report, json)?;

    if json {
        println!("{}", rendered);
    } else {
        // The bare area is written with no trailing newline.
        print!("{}", rendered);
    }

    Ok(())
}

/// Text written to stdout for a successful estimate.
fn render(report: &SurfaceReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_missing_file_is_ok_by_default() {
        let dir = tempdir().unwrap();
        let config = Config {
            input: dir.path().join("placenta.txt"),
            ..Default::default()
        };
        assert!(run(&config, false).is_ok());
    }

    #[test]
    fn test_run_missing_file_strict() {
        let dir = tempdir().unwrap();
        let config = Config {
            input: dir.path().join("placenta.txt"),
            strict_missing: true,
            ..Default::default()
        };
        let err = run(&config, false).unwrap_err();
        let voxel = err.downcast_ref::<VoxelError>().unwrap();
        assert!(voxel.is_not_found());
    }

    #[test]
    fn test_run_malformed_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("placenta.txt");
        std::fs::write(&path, "1.0, 2.0\n").unwrap();
        let config = Config {
            input: path,
            ..Default::default()
        };
        let err = run(&config, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VoxelError>(),
            Some(VoxelError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_run_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("placenta.txt");
        std::fs::write(&path, "2.0, 3.0, 5.0\n").unwrap();
        let config = Config {
            input: path,
            ..Default::default()
        };
        assert!(run(&config, true).is_ok());
    }

    #[test]
    fn test_render_bare_area() {
        let store = voxsurf::CoordinateStore::parse("2.0, 3.0, 5.0\n").unwrap();
        let report = SurfaceEstimator::default().estimate(&store).unwrap();
        assert_eq!(render(&report, false).unwrap(), "62.0");
    }

    #[test]
    fn test_render_empty_area() {
        let report = SurfaceEstimator::default()
            .estimate(&voxsurf::CoordinateStore::default())
            .unwrap();
        assert_eq!(render(&report, false).unwrap(), "0.0");
    }

    #[test]
    fn test_render_json_report() {
        let store = voxsurf::CoordinateStore::parse("2.0, 3.0, 5.0").unwrap();
        let report = SurfaceEstimator::default().estimate(&store).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&report, true).unwrap()).unwrap();
        assert_eq!(json["area"], 62.0);
        assert_eq!(json["voxel_count"], 1);
    }
}
