// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date::stamp_suffix;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Decide where the output really goes.
///
/// - file does not exist, or `force` → the requested path
/// - file exists → `<stem>_<YYYYMMDD_HHMMSS>.<ext>`, then `<stem>_<n>.<ext>`
pub(crate) fn resolve_output(path: &Path, force: bool) -> AppResult<PathBuf> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        return Err(AppError::Export(format!(
            "output directory does not exist: {}",
            dir.display()
        )));
    }

    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    if force {
        info(format!("Overwriting existing file: {}", path.display()));
        return Ok(path.to_path_buf());
    }

    let renamed = available_name(path, &stamp_suffix(Local::now().naive_local()));
    warning(format!(
        "The file '{}' already exists, writing to '{}' instead.",
        path.display(),
        renamed.display()
    ));
    Ok(renamed)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let name = match path.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };

    path.with_file_name(name)
}

pub(crate) fn available_name(path: &Path, stamp: &str) -> PathBuf {
    let stamped = with_suffix(path, stamp);
    if !stamped.exists() {
        return stamped;
    }

    let mut counter = 1usize;
    loop {
        let candidate = with_suffix(path, &counter.to_string());
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
