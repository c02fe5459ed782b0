//! Workspace discovery and structure
//!
//! A formwright workspace is a directory tree marked by `.formwright/`,
//! with finished templates under `templates/` and in-progress wizard
//! drafts under `drafts/`, all as plain-text YAML.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::identity::TemplateId;

/// File extension for finished templates
pub const TEMPLATE_EXT: &str = ".form.yaml";

/// File extension for wizard drafts
pub const DRAFT_EXT: &str = ".draft.yaml";

/// Represents a formwright workspace
#[derive(Debug)]
pub struct Workspace {
    /// Root directory (parent of .formwright/)
    root: PathBuf,
}

impl Workspace {
    /// Find the workspace root by walking up from the current directory
    pub fn discover() -> Result<Self, WorkspaceError> {
        let current =
            std::env::current_dir().map_err(|e| WorkspaceError::Io(e.to_string()))?;
        Self::discover_from(&current)
    }

    /// Find the workspace root by walking up from the given directory
    pub fn discover_from(start: &Path) -> Result<Self, WorkspaceError> {
        let mut current = start
            .canonicalize()
            .map_err(|e| WorkspaceError::Io(e.to_string()))?;

        loop {
            if current.join(".formwright").is_dir() {
                return Ok(Self { root: current });
            }
            if !current.pop() {
                return Err(WorkspaceError::NotFound {
                    searched_from: start.to_path_buf(),
                });
            }
        }
    }

    /// Create a new workspace at the given path
    pub fn init(path: &Path) -> Result<Self, WorkspaceError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if root.join(".formwright").exists() {
            return Err(WorkspaceError::AlreadyExists(root));
        }

        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    /// Initialize even if .formwright/ already exists
    pub fn init_force(path: &Path) -> Result<Self, WorkspaceError> {
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Self::create_structure(&root)?;
        Ok(Self { root })
    }

    fn create_structure(root: &Path) -> Result<(), WorkspaceError> {
        let marker = root.join(".formwright");
        std::fs::create_dir_all(&marker).map_err(|e| WorkspaceError::Io(e.to_string()))?;
        std::fs::write(marker.join("config.yaml"), Self::default_config())
            .map_err(|e| WorkspaceError::Io(e.to_string()))?;

        for dir in ["templates", "drafts"] {
            std::fs::create_dir_all(root.join(dir))
                .map_err(|e| WorkspaceError::Io(e.to_string()))?;
        }
        Ok(())
    }

    fn default_config() -> &'static str {
        r#"# Formwright workspace configuration

# Default output format (auto, yaml, tsv, json, csv, id)
# default_format: auto
"#
    }

    /// Get the workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the templates directory
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    /// Get the drafts directory
    pub fn drafts_dir(&self) -> PathBuf {
        self.root.join("drafts")
    }

    /// Path for a template file with the given id
    pub fn template_path(&self, id: &TemplateId) -> PathBuf {
        self.templates_dir().join(format!("{}{}", id, TEMPLATE_EXT))
    }

    /// Iterate all template files in the workspace
    pub fn iter_template_files(&self) -> impl Iterator<Item = PathBuf> {
        walkdir::WalkDir::new(self.templates_dir())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().to_string_lossy().ends_with(TEMPLATE_EXT))
            .map(|e| e.path().to_path_buf())
    }

}

/// Errors that can occur during workspace operations
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("not a formwright workspace (searched from {searched_from:?}). Run 'fwt init' to create one.")]
    NotFound { searched_from: PathBuf },

    #[error("formwright workspace already exists at {0:?}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_structure() {
        let tmp = tempdir().unwrap();
        let ws = Workspace::init(tmp.path()).unwrap();

        assert!(ws.root().join(".formwright/config.yaml").exists());
        assert!(ws.templates_dir().is_dir());
        assert!(ws.drafts_dir().is_dir());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let tmp = tempdir().unwrap();
        Workspace::init(tmp.path()).unwrap();

        let err = Workspace::init(tmp.path()).unwrap_err();
        assert!(matches!(err, WorkspaceError::AlreadyExists(_)));
    }

    #[test]
    fn test_discover_from_nested_dir() {
        let tmp = tempdir().unwrap();
        Workspace::init(tmp.path()).unwrap();

        let nested = tmp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let ws = Workspace::discover_from(&nested).unwrap();
        assert_eq!(
            ws.root().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_discover_fails_outside_workspace() {
        let tmp = tempdir().unwrap();
        let err = Workspace::discover_from(tmp.path()).unwrap_err();
        assert!(matches!(err, WorkspaceError::NotFound { .. }));
    }

    #[test]
    fn test_template_path_uses_id_and_extension() {
        let tmp = tempdir().unwrap();
        let ws = Workspace::init(tmp.path()).unwrap();
        let id = TemplateId::new();

        let path = ws.template_path(&id);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("FORM-"));
        assert!(name.ends_with(TEMPLATE_EXT));
    }
}
