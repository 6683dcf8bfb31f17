//! `scale-damage` command handler

use anyhow::Result;
use housekeeping::{rescale_themes, BatchSummary, ThemeBatch, ThemeEvent};

use crate::cli::ScaleDamageCli;
use crate::config::Config;

const RULE_WIDTH: usize = 60;

/// Handle the scale-damage command
///
/// Returns the batch summary; the caller decides the exit status from
/// [`BatchSummary::has_failures`].
pub fn handle(cli: &ScaleDamageCli) -> Result<BatchSummary> {
    let config = Config::load(cli.config.as_deref())?;
    let batch = config.damage.resolve(cli.overrides(), cli.factor, cli.dry_run)?;

    Ok(run(&batch))
}

/// Rescale every configured theme file, printing progress to stdout
pub fn run(batch: &ThemeBatch) -> BatchSummary {
    let rule = "=".repeat(RULE_WIDTH);

    println!("Weapon Damage Scaling");
    println!("Scaling all weapon damage values by {}x", batch.factor);
    if batch.dry_run {
        println!("Dry run: no files will be written");
    }
    println!("{}", rule);

    let summary = rescale_themes(batch, print_event);

    println!();
    println!("{}", rule);
    println!("Weapon damage scaling complete!");
    if batch.dry_run {
        println!("Files that would be updated: {}", summary.files_updated);
    } else {
        println!("Files updated: {}", summary.files_updated);
    }
    if summary.has_failures() {
        println!("Files failed: {}", summary.files_failed);
    } else if !batch.dry_run {
        println!("All weapon damage values have been scaled by {}x.", batch.factor);
    }

    summary
}

fn print_event(event: &ThemeEvent<'_>) {
    match event {
        ThemeEvent::ThemeStarted { theme } => {
            println!();
            println!("Processing theme: {}", theme);
        }
        ThemeEvent::ThemeMissing { dir } => {
            println!("  Warning: Theme directory {} not found", dir.display());
        }
        ThemeEvent::FileStarted { path } => {
            println!("Processing {}...", path.display());
        }
        ThemeEvent::FileMissing { path } => {
            println!("  Warning: File {} not found", path.display());
        }
        ThemeEvent::FileDone { path, report } => {
            for change in &report.changes {
                println!("  {}: {} -> {}", change.weapon_id, change.old, change.new);
            }
            if report.written {
                println!("  Updated {}", path.display());
            } else if report.changed() {
                println!("  Would update {}", path.display());
            } else {
                println!("  No damage values found in {}", path.display());
            }
        }
        ThemeEvent::FileFailed { path, error } => {
            println!("  Error: {}: {}", path.display(), error);
        }
    }
}
