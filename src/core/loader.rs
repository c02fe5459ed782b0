//! Template loading utilities
//!
//! Generic helpers for reading YAML artifacts back off disk, keeping the
//! command implementations free of filesystem boilerplate.

use miette::{IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Find an artifact file whose stem contains the given id fragment
pub fn find_file(dir: &Path, id: &str) -> Option<PathBuf> {
    if !dir.exists() {
        return None;
    }

    for entry in fs::read_dir(dir).ok()? {
        let entry = entry.ok()?;
        let path = entry.path();

        if path.to_string_lossy().ends_with(".yaml") {
            let filename = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            if filename.contains(id) {
                return Some(path);
            }
        }
    }

    None
}

/// Load a single artifact by id fragment, returning its path and value
pub fn load_by_id<T: DeserializeOwned + 'static>(
    dir: &Path,
    id: &str,
) -> Result<Option<(PathBuf, T)>> {
    if let Some(path) = find_file(dir, id) {
        let content = fs::read_to_string(&path).into_diagnostic()?;
        let item: T = serde_yml::from_str(&content).into_diagnostic()?;
        return Ok(Some((path, item)));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_by_id_missing_dir() {
        let result: Option<(PathBuf, serde_json::Value)> =
            load_by_id(Path::new("/nonexistent/path"), "FORM-01").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_find_file_by_fragment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("FORM-01J123456789ABCDEF.form.yaml");
        fs::write(&path, "title: test").unwrap();

        assert_eq!(find_file(dir.path(), "FORM-01J123"), Some(path));
        assert!(find_file(dir.path(), "FORM-99").is_none());
    }
}
