pub mod common;
pub mod project_structure;
pub mod request;

pub use crate::domain::DomainError;
pub use project_structure::{GeneratedFile, ProjectStructure};
pub use request::{Authorship, ProjectRequest, ProjectRequestBuilder};
