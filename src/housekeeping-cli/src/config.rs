//! Configuration management for the housekeeping tools
//!
//! Values come from, in order of precedence: command-line flags, the TOML
//! config file, built-in defaults.

use anyhow::{Context, Result};
use housekeeping::{RelocateOptions, ScaleFactor, ThemeBatch, DEFAULT_PREFIX, DEFAULT_YEAR};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default plans directory, relative to the working directory
pub const DEFAULT_PLANS_DIR: &str = "plans";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub cycle: CycleConfig,
    pub damage: DamageConfig,
}

/// `[cycle]` section
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CycleConfig {
    pub plans_dir: Option<PathBuf>,
    pub completed_dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub year: Option<u32>,
}

/// `[damage]` section
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DamageConfig {
    pub themes_dir: Option<PathBuf>,
    pub themes: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
    /// Kept as a number in TOML; validated when resolved
    pub factor: Option<f64>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("housekeeping");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from `path`, or the default location when `None`
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!("{:#}, using defaults", e);
                    return Ok(Config::default());
                }
            },
        };

        if !config_path.exists() {
            tracing::debug!("no config at {}", config_path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }
}

impl CycleConfig {
    /// Relocation options with `overrides` taking precedence over this section
    pub fn resolve(&self, overrides: CycleConfig, dry_run: bool) -> RelocateOptions {
        let plans_dir = overrides
            .plans_dir
            .or_else(|| self.plans_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLANS_DIR));

        let mut options = RelocateOptions::new(plans_dir);
        if let Some(dir) = overrides.completed_dir.or_else(|| self.completed_dir.clone()) {
            options.destination_dir = dir;
        }
        options.prefix = overrides
            .prefix
            .or_else(|| self.prefix.clone())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        options.year = overrides.year.or(self.year).unwrap_or(DEFAULT_YEAR);
        options.dry_run = dry_run;
        options
    }
}

impl DamageConfig {
    /// Theme batch with `factor` and the other overrides taking precedence
    pub fn resolve(
        &self,
        overrides: DamageConfig,
        factor: Option<ScaleFactor>,
        dry_run: bool,
    ) -> Result<ThemeBatch> {
        let mut batch = ThemeBatch::default();

        if let Some(dir) = overrides.themes_dir.or_else(|| self.themes_dir.clone()) {
            batch.themes_dir = dir;
        }
        if let Some(themes) = overrides.themes.or_else(|| self.themes.clone()) {
            batch.themes = themes;
        }
        if let Some(files) = overrides.files.or_else(|| self.files.clone()) {
            batch.files = files;
        }

        batch.factor = match (factor, self.factor) {
            (Some(f), _) => f,
            (None, Some(value)) => ScaleFactor::from_f64(value)
                .context("Invalid factor in [damage] config section")?,
            (None, None) => ScaleFactor::default(),
        };
        batch.dry_run = dry_run;

        Ok(batch)
    }
}
