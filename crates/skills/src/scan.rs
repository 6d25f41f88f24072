use std::{io::ErrorKind, path::Path, time::SystemTime};

use {
    chrono::{DateTime, Utc},
    walkdir::WalkDir,
};

use crate::{error::Result, types::format_timestamp};

/// Newest modification time of any regular file under `dir`, recursively.
///
/// Symlinks to files count with their target's mtime; dangling links and
/// directories are skipped. Symlinked directories are not descended into.
/// Returns `None` when the subtree holds no files.
pub fn latest_file_mtime(dir: &Path) -> Result<Option<SystemTime>> {
    let mut latest: Option<SystemTime> = None;
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let metadata = match std::fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = ?entry.path(), "skipping dangling symlink");
                continue;
            },
            Err(e) => return Err(e.into()),
        };
        let modified = metadata.modified()?;
        if latest.is_none_or(|current| modified > current) {
            latest = Some(modified);
        }
    }
    Ok(latest)
}

/// Manifest `updated_at` for a skill directory.
///
/// Falls back to the current time when the directory holds no files.
pub fn skill_updated_at(skill_dir: &Path) -> Result<String> {
    let at = match latest_file_mtime(skill_dir)? {
        Some(mtime) => DateTime::<Utc>::from(mtime),
        None => {
            tracing::debug!(?skill_dir, "no files in skill directory, using current time");
            Utc::now()
        },
    };
    Ok(format_timestamp(at))
}
