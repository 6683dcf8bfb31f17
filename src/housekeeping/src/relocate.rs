//! Archive relocation for finished dev cycle documents.
//!
//! Every entry in the plans directory whose name starts with
//! `<prefix>_<year>_<cycle:04>` is moved into the completed directory. Entries
//! whose name is already taken at the destination are left where they are.
//! Failures on individual entries are reported and do not stop the run.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cycle::CycleNumber;
use crate::fs_utils::{display_name, entries_with_prefix, move_entry};

/// Default document prefix for dev cycle plans
pub const DEFAULT_PREFIX: &str = "DevCycle";

/// Default year component of the document prefix
pub const DEFAULT_YEAR: u32 = 2025;

/// Errors that stop a relocation before any entry is moved
#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("Failed to read {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create {path}: {source}")]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where to look, where to put things, and how names are built
#[derive(Debug, Clone)]
pub struct RelocateOptions {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub prefix: String,
    pub year: u32,
    pub dry_run: bool,
}

impl RelocateOptions {
    /// Options for `source_dir` with the archive in `source_dir/completed`
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        RelocateOptions {
            destination_dir: source_dir.join("completed"),
            source_dir,
            prefix: DEFAULT_PREFIX.to_string(),
            year: DEFAULT_YEAR,
            dry_run: false,
        }
    }

    /// Filename prefix matched for `cycle`
    pub fn pattern_prefix(&self, cycle: CycleNumber) -> String {
        cycle.prefix(&self.prefix, self.year)
    }
}

/// Progress reported while relocating
#[derive(Debug)]
pub enum RelocateEvent<'a> {
    /// The source directory does not exist; nothing will be moved
    SourceMissing { dir: &'a Path },

    /// No entry matched the prefix
    NoMatches { prefix: &'a str },

    /// Number of matching entries about to be processed
    Found { count: usize },

    Moved { name: &'a str },

    /// Dry run: the entry would have been moved
    WouldMove { name: &'a str },

    /// Destination already has an entry with this name
    Skipped { name: &'a str },

    Failed { name: &'a str, error: &'a io::Error },
}

/// Counts for one relocation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelocateSummary {
    pub found: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Move every document of `cycle` into the archive directory
///
/// Calls `on_event` for each decision as it happens. In a dry run nothing on
/// disk changes and `moved` counts the entries that would have been moved.
pub fn relocate<F>(
    cycle: CycleNumber,
    options: &RelocateOptions,
    mut on_event: F,
) -> Result<RelocateSummary, RelocateError>
where
    F: FnMut(&RelocateEvent<'_>),
{
    let prefix = options.pattern_prefix(cycle);
    let mut summary = RelocateSummary::default();

    if !options.source_dir.is_dir() {
        tracing::warn!("source directory {} not found", options.source_dir.display());
        on_event(&RelocateEvent::SourceMissing {
            dir: &options.source_dir,
        });
        return Ok(summary);
    }

    let matches = entries_with_prefix(&options.source_dir, &prefix).map_err(|source| {
        RelocateError::ReadSource {
            path: options.source_dir.clone(),
            source,
        }
    })?;

    if matches.is_empty() {
        on_event(&RelocateEvent::NoMatches { prefix: &prefix });
        return Ok(summary);
    }

    summary.found = matches.len();
    on_event(&RelocateEvent::Found {
        count: matches.len(),
    });

    if !options.dry_run {
        std::fs::create_dir_all(&options.destination_dir).map_err(|source| {
            RelocateError::CreateDestination {
                path: options.destination_dir.clone(),
                source,
            }
        })?;
    }

    for path in &matches {
        let name = display_name(path);
        let destination = match path.file_name() {
            Some(file_name) => options.destination_dir.join(file_name),
            None => continue,
        };

        // symlink_metadata so a dangling link at the destination still counts as taken
        if destination.symlink_metadata().is_ok() {
            summary.skipped += 1;
            on_event(&RelocateEvent::Skipped { name: &name });
            continue;
        }

        if options.dry_run {
            summary.moved += 1;
            on_event(&RelocateEvent::WouldMove { name: &name });
            continue;
        }

        match move_entry(path, &destination) {
            Ok(()) => {
                tracing::debug!("moved {} -> {}", path.display(), destination.display());
                summary.moved += 1;
                on_event(&RelocateEvent::Moved { name: &name });
            }
            Err(error) => {
                tracing::warn!("failed to move {}: {}", path.display(), error);
                summary.failed += 1;
                on_event(&RelocateEvent::Failed {
                    name: &name,
                    error: &error,
                });
            }
        }
    }

    Ok(summary)
}
