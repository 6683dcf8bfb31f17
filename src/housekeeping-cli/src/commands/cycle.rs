//! `move-cycle` command handler
//!
//! Validates the cycle number before touching the filesystem, then relocates
//! the cycle's documents and prints one line per entry plus a summary.

use anyhow::{Context, Result};
use housekeeping::{relocate, CycleNumber, RelocateEvent, RelocateOptions, RelocateSummary};

use crate::cli::MoveCycleCli;
use crate::config::Config;

/// Handle the move-cycle command
pub fn handle(cli: &MoveCycleCli) -> Result<RelocateSummary> {
    let cycle: CycleNumber = cli.cycle.parse()?;

    let config = Config::load(cli.config.as_deref())?;
    let options = config.cycle.resolve(cli.overrides(), cli.dry_run);

    run(cycle, &options)
}

/// Relocate `cycle` with resolved options, printing progress to stdout
pub fn run(cycle: CycleNumber, options: &RelocateOptions) -> Result<RelocateSummary> {
    let destination = options.destination_dir.display();

    println!(
        "Moving {} {}-{} files to {}...",
        options.prefix,
        options.year,
        cycle.padded(),
        destination
    );

    let summary = relocate(cycle, options, |event| print_event(event, options))
        .context("Failed to relocate cycle files")?;

    println!();
    if options.dry_run {
        println!(
            "Dry run: {} files would be moved to {}",
            summary.moved, destination
        );
    } else {
        println!("Completed: {} files moved to {}", summary.moved, destination);
    }

    Ok(summary)
}

fn print_event(event: &RelocateEvent<'_>, options: &RelocateOptions) {
    match event {
        RelocateEvent::SourceMissing { dir } => {
            println!("Source directory {} not found", dir.display());
        }
        RelocateEvent::NoMatches { prefix } => {
            println!("No files found matching pattern: {}*", prefix);
        }
        RelocateEvent::Found { count } => {
            println!("Found {} files to move:", count);
        }
        RelocateEvent::Moved { name } => {
            println!("  Moved: {}", name);
        }
        RelocateEvent::WouldMove { name } => {
            println!("  Would move: {}", name);
        }
        RelocateEvent::Skipped { name } => {
            println!(
                "  WARNING: {} already exists in {}, skipping",
                name,
                options.destination_dir.display()
            );
        }
        RelocateEvent::Failed { name, error } => {
            println!("  Error moving {}: {}", name, error);
        }
    }
}
