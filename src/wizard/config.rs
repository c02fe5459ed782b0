//! In-progress wizard configuration
//!
//! `WizardConfig` is the mutable working document for one wizard session:
//! the template's name and description, the chosen category, and the
//! category-specific settings collected along the way. The host UI writes
//! into it on every input change; the schema builder reads it once at
//! finalize.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::category::Category;

/// Category-specific configuration values, keyed by camelCase names
/// (`minOptions`, `passingScore`, ...) as produced by the host UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryData(BTreeMap<String, Value>);

impl CategoryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Get an integer value; `None` if absent or not an integer
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(|v| v.as_i64())
    }

    /// Get a numeric value; `None` if absent or not a number
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(|v| v.as_f64())
    }

    /// Get a boolean value; `None` if absent or not a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(|v| v.as_bool())
    }

    /// Get a string value; `None` if absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Merge entries from another map, overwriting existing keys
    pub fn merge(&mut self, other: &CategoryData) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for CategoryData {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The working document for one wizard session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Human-readable template title; required non-empty at finalize
    #[serde(default)]
    pub template_name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template_description: String,

    /// Chosen category; immutable once step 0 is confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Category-specific configuration values
    #[serde(default, skip_serializing_if = "CategoryData::is_empty")]
    pub category_data: CategoryData,
}

impl WizardConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A partial update to a [`WizardConfig`], applied by the wizard's
/// `update` operation. Absent fields leave the config untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub template_name: Option<String>,
    pub template_description: Option<String>,
    pub category_data: CategoryData,
}

impl ConfigPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            template_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn data(data: CategoryData) -> Self {
        Self {
            category_data: data,
            ..Self::default()
        }
    }
}
