//! Core module - categories, identity, workspace, persistence

pub mod category;
pub mod identity;
pub mod loader;
pub mod project;
pub mod store;

pub use category::{Category, UnknownCategory};
pub use identity::{field_id, IdParseError, TemplateId};
pub use project::{Workspace, WorkspaceError};
pub use store::{save_template, DraftStore};
