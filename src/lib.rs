//! Formwright: form-template wizard toolkit
//!
//! Builds form templates through a category-driven wizard and stores
//! them as plain text YAML files under a discovered workspace.

pub mod cli;
pub mod core;
pub mod schema;
pub mod wizard;
pub mod yaml;
