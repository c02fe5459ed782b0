//! Wizard core - working config, validators, and the step state machine

pub mod config;
pub mod state;
pub mod validate;

pub use config::{CategoryData, ConfigPatch, WizardConfig};
pub use state::{DraftError, DraftSink, TemplateWizard, WizardEvent, STEP_COUNT};
pub use validate::{validate_category_configuration, ValidationResult};
