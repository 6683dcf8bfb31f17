//! `move-cycle` arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::CycleConfig;

#[derive(Parser, Debug)]
#[command(name = "move-cycle", version)]
#[command(about = "Move a finished dev cycle's planning documents to the completed folder")]
#[command(after_help = "Example: move-cycle 13\n\
    Moves DevCycle_2025_0013.md, DevCycle_2025_0013_brainstorm.md, ... into plans/completed/")]
pub struct MoveCycleCli {
    /// Cycle number (1-9999)
    #[arg(allow_negative_numbers = true)]
    pub cycle: String,

    /// Directory holding the planning documents
    #[arg(long)]
    pub plans_dir: Option<PathBuf>,

    /// Archive directory (defaults to <plans-dir>/completed)
    #[arg(long)]
    pub completed_dir: Option<PathBuf>,

    /// Document name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Year component of document names
    #[arg(long)]
    pub year: Option<u32>,

    /// Report what would be moved without touching any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Config file (defaults to <config dir>/housekeeping/config.toml)
    #[arg(long, env = "HOUSEKEEPING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl MoveCycleCli {
    /// Command-line overrides for the `[cycle]` config section
    pub fn overrides(&self) -> CycleConfig {
        CycleConfig {
            plans_dir: self.plans_dir.clone(),
            completed_dir: self.completed_dir.clone(),
            prefix: self.prefix.clone(),
            year: self.year,
        }
    }
}
