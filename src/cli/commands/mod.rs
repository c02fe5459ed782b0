//! Command implementations

pub mod categories;
pub mod completions;
pub mod drafts;
pub mod init;
pub mod list;
pub mod new;
pub mod show;
pub mod validate;
