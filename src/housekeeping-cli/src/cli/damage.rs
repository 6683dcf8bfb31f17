//! `scale-damage` arguments

use clap::Parser;
use housekeeping::ScaleFactor;
use std::path::PathBuf;

use crate::config::DamageConfig;

#[derive(Parser, Debug)]
#[command(name = "scale-damage", version)]
#[command(about = "Scale weapon damage values in theme JSON files")]
pub struct ScaleDamageCli {
    /// Directory holding one subdirectory per theme
    #[arg(long)]
    pub themes_dir: Option<PathBuf>,

    /// Theme to process (repeatable; defaults to test_theme and civil_war)
    #[arg(long = "theme")]
    pub themes: Vec<String>,

    /// Weapon file to process in each theme (repeatable)
    #[arg(long = "file")]
    pub files: Vec<String>,

    /// Multiplier applied to every damage value
    #[arg(long)]
    pub factor: Option<ScaleFactor>,

    /// Show the changes without rewriting any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Config file (defaults to <config dir>/housekeeping/config.toml)
    #[arg(long, env = "HOUSEKEEPING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScaleDamageCli {
    /// Command-line overrides for the `[damage]` config section
    pub fn overrides(&self) -> DamageConfig {
        DamageConfig {
            themes_dir: self.themes_dir.clone(),
            themes: non_empty(&self.themes),
            files: non_empty(&self.files),
            factor: None,
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}
