//! Batch damage rescaling across theme directories.

use std::path::{Path, PathBuf};

use crate::damage::{rescale_file, RescaleError, RescaleReport, ScaleFactor};

/// Directory holding one subdirectory per theme
pub const DEFAULT_THEMES_DIR: &str = "src/main/resources/data/themes";

/// Themes rescaled when none are configured
pub const DEFAULT_THEMES: [&str; 2] = ["test_theme", "civil_war"];

/// Weapon files looked up inside each theme
pub const DEFAULT_WEAPON_FILES: [&str; 2] = ["ranged-weapons.json", "melee-weapons.json"];

/// Which theme files to rescale, and by how much
#[derive(Debug, Clone)]
pub struct ThemeBatch {
    pub themes_dir: PathBuf,
    pub themes: Vec<String>,
    pub files: Vec<String>,
    pub factor: ScaleFactor,
    pub dry_run: bool,
}

impl Default for ThemeBatch {
    fn default() -> Self {
        ThemeBatch {
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            themes: DEFAULT_THEMES.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_WEAPON_FILES.iter().map(|s| s.to_string()).collect(),
            factor: ScaleFactor::default(),
            dry_run: false,
        }
    }
}

/// Progress reported while rescaling a batch
#[derive(Debug)]
pub enum ThemeEvent<'a> {
    ThemeStarted { theme: &'a str },
    ThemeMissing { dir: &'a Path },
    FileStarted { path: &'a Path },
    FileMissing { path: &'a Path },
    FileDone { path: &'a Path, report: &'a RescaleReport },
    FileFailed { path: &'a Path, error: &'a RescaleError },
}

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files with at least one rescaled value (rewritten unless dry run)
    pub files_updated: usize,
    pub files_unchanged: usize,
    pub files_missing: usize,
    pub themes_missing: usize,
    pub files_failed: usize,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

/// Rescale every configured weapon file of every configured theme
///
/// Missing themes and files are reported and skipped. A file that fails
/// (unreadable, malformed JSON, overflow) is reported and the batch moves on
/// to the next one; nothing already written is rolled back.
pub fn rescale_themes<F>(batch: &ThemeBatch, mut on_event: F) -> BatchSummary
where
    F: FnMut(&ThemeEvent<'_>),
{
    let mut summary = BatchSummary::default();

    for theme in &batch.themes {
        on_event(&ThemeEvent::ThemeStarted { theme });

        let theme_dir = batch.themes_dir.join(theme);
        if !theme_dir.is_dir() {
            tracing::warn!("theme directory {} not found", theme_dir.display());
            summary.themes_missing += 1;
            on_event(&ThemeEvent::ThemeMissing { dir: &theme_dir });
            continue;
        }

        for file in &batch.files {
            let path = theme_dir.join(file);
            if !path.is_file() {
                summary.files_missing += 1;
                on_event(&ThemeEvent::FileMissing { path: &path });
                continue;
            }

            on_event(&ThemeEvent::FileStarted { path: &path });
            match rescale_file(&path, batch.factor, batch.dry_run) {
                Ok(report) => {
                    if report.changed() {
                        summary.files_updated += 1;
                    } else {
                        summary.files_unchanged += 1;
                    }
                    on_event(&ThemeEvent::FileDone {
                        path: &path,
                        report: &report,
                    });
                }
                Err(error) => {
                    tracing::warn!("{}", error);
                    summary.files_failed += 1;
                    on_event(&ThemeEvent::FileFailed {
                        path: &path,
                        error: &error,
                    });
                }
            }
        }
    }

    summary
}
