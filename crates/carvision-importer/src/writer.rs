//! Output Writer: the list view plus one detail file per record.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use carvision_core::{CarListItem, CarRecord};
use serde::Serialize;

use crate::error::ImportError;

/// What [`write_output`] did on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Detail files removed by the clear step.
    pub cleared: usize,
    /// Distinct detail files written.
    pub detail_files: usize,
    /// Records whose detail file was overwritten later in the same run.
    pub slug_collisions: usize,
}

/// Writes `cars` as `list_path` and as `<detail_dir>/<slug>.json` files.
///
/// Creates `detail_dir` (and parents) first. With `clear`, every `*.json`
/// directly inside `detail_dir` is removed before writing; sub-directories
/// are not touched. Existing files are overwritten. Records sharing a slug
/// share a file and the later record wins.
///
/// # Errors
///
/// Returns [`ImportError::Io`] on any filesystem failure. Files written
/// before the failure are left in place.
pub fn write_output(
    cars: &[CarRecord],
    list_path: &Path,
    detail_dir: &Path,
    clear: bool,
) -> Result<WriteReport, ImportError> {
    std::fs::create_dir_all(detail_dir).map_err(|e| ImportError::io(detail_dir, e))?;
    if let Some(parent) = list_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ImportError::io(parent, e))?;
    }

    let cleared = if clear {
        clear_detail_files(detail_dir)?
    } else {
        0
    };

    let list_view: Vec<CarListItem> = cars.iter().map(CarRecord::list_item).collect();
    write_json(list_path, &list_view, "list view")?;
    tracing::info!(path = %list_path.display(), entries = list_view.len(), "wrote list view");

    let mut written: HashMap<PathBuf, &str> = HashMap::with_capacity(cars.len());
    let mut slug_collisions = 0usize;
    for car in cars {
        let path = detail_path(detail_dir, car);
        write_json(&path, car, &format!("car {}", car.id))?;
        tracing::debug!(path = %path.display(), id = %car.id, "wrote detail file");

        if let Some(previous_id) = written.insert(path.clone(), car.id.as_str()) {
            slug_collisions += 1;
            tracing::warn!(
                path = %path.display(),
                previous_id,
                id = %car.id,
                "detail file overwritten by a later record with the same slug"
            );
        }
    }

    Ok(WriteReport {
        cleared,
        detail_files: written.len(),
        slug_collisions,
    })
}

/// Path of the detail file for `car` inside `detail_dir`.
#[must_use]
pub fn detail_path(detail_dir: &Path, car: &CarRecord) -> PathBuf {
    detail_dir.join(format!("{}.json", car.file_slug()))
}

/// Removes every `*.json` entry directly inside `dir` that is not a
/// directory. Symlinks are removed, not followed.
///
/// Best-effort: a file that cannot be removed is logged and skipped.
fn clear_detail_files(dir: &Path) -> Result<usize, ImportError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ImportError::io(dir, e))?;

    let mut removed = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| ImportError::io(dir, e))?;
        let path = entry.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_dir = entry
            .file_type()
            .map_err(|e| ImportError::io(&path, e))?
            .is_dir();
        if !is_json || is_dir {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "could not remove stale detail file");
            }
        }
    }

    tracing::info!(dir = %dir.display(), removed, "cleared detail files");
    Ok(removed)
}

/// Pretty JSON (two-space indent, non-ASCII kept literal) plus a newline.
fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    context: &str,
) -> Result<(), ImportError> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| ImportError::Serialize {
        context: context.to_owned(),
        source: e,
    })?;
    json.push('\n');
    std::fs::write(path, json).map_err(|e| ImportError::io(path, e))
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
