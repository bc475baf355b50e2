//! Domain models
//!
//! `Project` is the row as stored; `ProjectFields` is the writable subset a
//! caller sends on create/update.

pub mod project;
pub mod validation;

pub use project::{Project, ProjectFields};
pub use validation::ValidationError;
