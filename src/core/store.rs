//! Draft and template persistence
//!
//! The wizard treats persistence as an opaque collaborator; this module
//! is the file-backed implementation the CLI plugs in: drafts land in
//! `drafts/<slug>.draft.yaml`, finished schemas in
//! `templates/<FORM-id>.form.yaml`.

use std::fs;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

use crate::core::loader;
use crate::core::project::{Workspace, DRAFT_EXT};
use crate::schema::form::FormSchema;
use crate::wizard::config::WizardConfig;
use crate::wizard::state::{DraftError, DraftSink};

/// File-backed draft store rooted at a workspace's `drafts/` directory
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    pub fn new(workspace: &Workspace) -> Self {
        Self {
            dir: workspace.drafts_dir(),
        }
    }

    /// Path a draft with this name would be saved at
    pub fn draft_path(&self, template_name: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}", slugify(template_name), DRAFT_EXT))
    }

    /// Load a draft by name slug
    pub fn load(&self, name: &str) -> Result<Option<(PathBuf, WizardConfig)>> {
        loader::load_by_id(&self.dir, &slugify(name))
    }

    /// All drafts currently on disk
    pub fn list(&self) -> Result<Vec<(PathBuf, WizardConfig)>> {
        let mut drafts = Vec::new();
        if !self.dir.exists() {
            return Ok(drafts);
        }
        for entry in fs::read_dir(&self.dir).into_diagnostic()? {
            let path = entry.into_diagnostic()?.path();
            if path.to_string_lossy().ends_with(DRAFT_EXT) {
                let content = fs::read_to_string(&path).into_diagnostic()?;
                if let Ok(draft) = serde_yml::from_str::<WizardConfig>(&content) {
                    drafts.push((path, draft));
                }
            }
        }
        Ok(drafts)
    }
}

impl DraftSink for DraftStore {
    fn save_draft(&mut self, draft: &WizardConfig) -> Result<(), DraftError> {
        let yaml =
            serde_yml::to_string(draft).map_err(|e| DraftError::Serialize(e.to_string()))?;
        fs::create_dir_all(&self.dir)?;
        fs::write(self.draft_path(&draft.template_name), yaml)?;
        Ok(())
    }
}

/// Write a finished schema into the workspace; returns the file path
pub fn save_template(workspace: &Workspace, schema: &FormSchema) -> Result<PathBuf> {
    let path = workspace.template_path(&schema.id);
    let yaml = serde_yml::to_string(schema).into_diagnostic()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    fs::write(&path, yaml).into_diagnostic()?;
    Ok(path)
}

/// Filesystem-safe slug for a draft filename
fn slugify(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;
    use crate::schema::builder::build_schema_for_category;
    use serde_json::json;
    use tempfile::tempdir;

    fn workspace() -> (tempfile::TempDir, Workspace) {
        let tmp = tempdir().unwrap();
        let ws = Workspace::init(tmp.path()).unwrap();
        (tmp, ws)
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Satisfaction Poll"), "satisfaction-poll");
        assert_eq!(slugify("  !!  "), "untitled");
        assert_eq!(slugify("Q4 / Review"), "q4---review");
    }

    #[test]
    fn test_draft_roundtrip_through_store() {
        let (_tmp, ws) = workspace();
        let mut store = DraftStore::new(&ws);

        let mut draft = WizardConfig::new();
        draft.template_name = "Half Poll".to_string();
        draft.category = Some(Category::Polls);
        draft.category_data.set("minOptions", json!(2));

        store.save_draft(&draft).unwrap();

        let (_, loaded) = store.load("Half Poll").unwrap().unwrap();
        assert_eq!(loaded.template_name, "Half Poll");
        assert_eq!(loaded.category, Some(Category::Polls));
        assert_eq!(loaded.category_data.get_i64("minOptions"), Some(2));

        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_save_template_writes_readable_yaml() {
        let (_tmp, ws) = workspace();

        let mut cfg = WizardConfig::new();
        cfg.template_name = "Poll".to_string();
        cfg.category = Some(Category::Polls);
        cfg.category_data.set("minOptions", json!(2));
        cfg.category_data.set("maxOptions", json!(5));

        let schema = build_schema_for_category(&cfg).unwrap();
        let path = save_template(&ws, &schema).unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        let parsed: FormSchema = serde_yml::from_str(&content).unwrap();
        assert_eq!(parsed.id, schema.id);
    }
}
