//! Form schema model and per-category builders

pub mod builder;
pub mod form;

pub use builder::{build_schema_for_category, BuildError};
pub use form::{
    BusinessLogicConfig, FieldOption, FieldType, FieldValidation, FormField, FormSchema,
    FormSettings,
};
