//! File system helpers for prefix scans and moves

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collect the immediate children of `dir` whose file name starts with `prefix`
///
/// Not recursive. Entries of any kind (files, directories, symlinks) match.
/// The result is sorted by file name. Names that are not valid UTF-8 never
/// match.
pub fn entries_with_prefix(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;

        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix))
        {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}

/// Move `from` to `to`
///
/// Tries a rename first. When that fails and the source is a plain file, falls
/// back to copy-then-remove, which covers moves across filesystems. If the
/// fallback fails too the original rename error is returned. The copy is
/// undone when the source cannot be removed, so the entry never ends up in
/// both places.
pub fn move_entry(from: &Path, to: &Path) -> io::Result<()> {
    let rename_err = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    let is_file = fs::symlink_metadata(from)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false);
    if !is_file || to.exists() {
        return Err(rename_err);
    }

    tracing::debug!(
        "rename {} failed ({}), copying instead",
        from.display(),
        rename_err
    );

    if fs::copy(from, to).is_err() {
        let _ = fs::remove_file(to);
        return Err(rename_err);
    }
    if let Err(e) = fs::remove_file(from) {
        let _ = fs::remove_file(to);
        return Err(e);
    }
    Ok(())
}

/// File name of `path` as a display string
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
