//! Form schema data model
//!
//! The persisted, versioned description of a generated form: its fields,
//! layout/submission settings, and the category-tagged business logic
//! that drives runtime behavior (vote counting, quiz scoring, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::category::Category;
use crate::core::identity::TemplateId;

/// Input widget type for a generated form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Radio,
    Select,
    Number,
    Date,
    Text,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Radio => write!(f, "radio"),
            FieldType::Select => write!(f, "select"),
            FieldType::Number => write!(f, "number"),
            FieldType::Date => write!(f, "date"),
            FieldType::Text => write!(f, "text"),
        }
    }
}

/// One choice in a radio or select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Numeric bounds attached to a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// A single field in a generated form schema
///
/// `order` values are zero-based and ascending by insertion; `id` values
/// are unique within the schema (see [`crate::core::identity::field_id`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    pub label: String,

    /// Machine name used by submission handlers
    pub field_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,

    pub order: u32,
}

/// Layout spacing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Medium,
    Relaxed,
}

/// Fixed single-column layout used by every generated schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    pub columns: u32,
    pub spacing: Spacing,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            columns: 1,
            spacing: Spacing::Medium,
        }
    }
}

/// Submission behavior for a generated form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSettings {
    pub success_message: String,

    /// Whether one respondent may submit more than once; the default
    /// varies per category (see the schema builders)
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    pub layout: LayoutSettings,
    pub submission: SubmissionSettings,
}

/// Category-tagged runtime behavior attached to a schema
///
/// The Events category deliberately carries no variant: its schemas are
/// built with `business_logic: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BusinessLogicConfig {
    Poll {
        /// Field name whose value is counted as the vote
        vote_field: String,
        prevent_duplicates: bool,
        tracking_method: String,
    },
    Quiz {
        passing_score: f64,
        allow_retakes: bool,
    },
    Inventory {
        enable_inventory: bool,
        enable_tax: bool,
        tax_rate: f64,
    },
    Appointment {
        slot_interval: i64,
        max_bookings_per_slot: i64,
    },
    Order {
        min_items: i64,
        enable_categories: bool,
    },
}

impl BusinessLogicConfig {
    /// The `type` discriminant this variant serializes under
    pub fn discriminant(&self) -> &'static str {
        match self {
            BusinessLogicConfig::Poll { .. } => "poll",
            BusinessLogicConfig::Quiz { .. } => "quiz",
            BusinessLogicConfig::Inventory { .. } => "inventory",
            BusinessLogicConfig::Appointment { .. } => "appointment",
            BusinessLogicConfig::Order { .. } => "order",
        }
    }
}

/// A complete, persistable form schema produced by one wizard completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub id: TemplateId,

    /// Runtime form identifier handed to the hosting environment
    pub form_id: String,

    pub version: u32,

    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub fields: Vec<FormField>,

    pub settings: FormSettings,

    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_logic: Option<BusinessLogicConfig>,

    pub is_published: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}
