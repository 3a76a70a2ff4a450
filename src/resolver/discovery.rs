//! Config path resolution and model discovery on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::request::ResolveError;

/// File extension of Piper voice models.
const MODEL_EXTENSION: &str = ".onnx";

/// Resolve the JSON config that belongs to a voice model.
///
/// An explicit path is returned unchanged, without checking that it exists.
/// Otherwise the candidates are tried in order:
/// 1. `<model>.json` (e.g. `voice.onnx.json`)
/// 2. `<model stem>.json` (e.g. `voice.json`)
///
/// Returns `None` when neither candidate exists.
pub fn resolve_config_path(model_path: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(config) = explicit {
        return Some(config.to_path_buf());
    }

    let mut appended = OsString::from(model_path.as_os_str());
    appended.push(".json");
    let appended = PathBuf::from(appended);
    if appended.exists() {
        debug!(config = %appended.display(), "resolved config by suffix");
        return Some(appended);
    }

    let replaced = model_path.with_extension("json");
    if replaced.exists() {
        debug!(config = %replaced.display(), "resolved config by extension");
        return Some(replaced);
    }

    None
}

/// Recursively collect every `.onnx` file (case-insensitive) under `dir`.
///
/// Paths are returned in traversal order. Symlinked directories are not
/// descended into; symlinks to files are kept. A `dir` that is not a
/// directory yields nothing. Entries that cannot be read are skipped.
pub fn list_models(dir: Option<&Path>) -> Result<Vec<PathBuf>, ResolveError> {
    let dir = dir.filter(|d| !d.as_os_str().is_empty()).ok_or_else(|| {
        ResolveError::Configuration("--models_dir required for --list_models".to_string())
    })?;

    let mut models = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !is_directory(&entry) && is_model_file(entry.path()) {
            models.push(entry.into_path());
        }
    }

    Ok(models)
}

fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn is_model_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .ends_with(MODEL_EXTENSION)
        })
        .unwrap_or(false)
}
