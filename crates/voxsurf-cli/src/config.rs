//! TOML configuration and command-line overrides.
//!
//! Precedence is flags, then the config file, then built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use voxsurf::{EmptyInputPolicy, EstimateSettings};

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "voxsurf.toml";

/// Coordinate file read when neither the CLI nor the config names one.
pub const DEFAULT_INPUT_FILE: &str = "placenta.txt";

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coordinate file to read.
    pub input: PathBuf,

    /// Treat a missing input file as an error.
    pub strict_missing: bool,

    /// Estimation parameters.
    pub estimate: EstimateSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            strict_missing: false,
            estimate: EstimateSettings::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid config")?;
        config.estimate.validate()?;
        Ok(config)
    }

    /// Load the config named on the command line, or the default file if it
    /// exists, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_fallback(explicit, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_with_fallback(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None if fallback.is_file() => fallback,
            None => return Ok(Self::default()),
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Overlay command-line flags.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if let Some(alignment) = cli.alignment {
            self.estimate.alignment = alignment;
        }
        if let Some(tolerance) = cli.tolerance {
            self.estimate.neighbor_tolerance = tolerance;
        }
        if cli.reject_empty {
            self.estimate.empty_input = EmptyInputPolicy::Reject;
        }
        if cli.strict_missing {
            self.strict_missing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;
    use voxsurf::AlignmentPolicy;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.input, PathBuf::from("placenta.txt"));
        assert!(!config.strict_missing);
        assert_eq!(config.estimate, EstimateSettings::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            input = "scan.txt"
            strict_missing = true

            [estimate]
            alignment = "leading-axis"
            neighbor_tolerance = 0.001
            empty_input = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("scan.txt"));
        assert!(config.strict_missing);
        assert_eq!(config.estimate.alignment, AlignmentPolicy::LeadingAxis);
        assert_eq!(config.estimate.neighbor_tolerance, 0.001);
        assert_eq!(config.estimate.empty_input, EmptyInputPolicy::Reject);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let err = Config::from_toml("[estimate]\nneighbor_tolerance = -1.0\n").unwrap_err();
        assert!(format!("{err:#}").contains("neighbor_tolerance"));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Config::from_toml("[estimate]\nalignment = \"longest\"\n").is_err());
    }

    #[test]
    fn test_missing_fallback_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_with_fallback(None, &dir.path().join("voxsurf.toml")).unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_FILE));
    }

    #[test]
    fn test_fallback_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("voxsurf.toml");
        std::fs::write(&path, "input = \"other.txt\"\n").unwrap();
        let config = Config::load_with_fallback(None, &path).unwrap();
        assert_eq!(config.input, PathBuf::from("other.txt"));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_with_fallback(Some(&missing), &missing).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "voxsurf",
            "scan.txt",
            "--alignment",
            "strict",
            "--tolerance",
            "0.01",
            "--reject-empty",
            "--strict-missing",
        ]);
        let mut config = Config::default();
        config.apply_cli(&cli);

        assert_eq!(config.input, PathBuf::from("scan.txt"));
        assert_eq!(config.estimate.alignment, AlignmentPolicy::Strict);
        assert_eq!(config.estimate.neighbor_tolerance, 0.01);
        assert_eq!(config.estimate.empty_input, EmptyInputPolicy::Reject);
        assert!(config.strict_missing);
    }

    #[test]
    fn test_no_args_keeps_defaults() {
        let cli = Cli::parse_from(["voxsurf"]);
        let mut config = Config::default();
        config.apply_cli(&cli);
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_FILE));
        assert_eq!(config.estimate, EstimateSettings::default());
    }
}
