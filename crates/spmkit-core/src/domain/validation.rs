use crate::domain::{
    entities::{ProjectRequest, ProjectStructure},
    error::DomainError,
    value_objects::ProjectName,
};

/// Centralized domain validation.
///
/// Entities enforce their own invariants; this is the single entry point the
/// application layer calls before touching the filesystem.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(raw: &str) -> Result<ProjectName, DomainError> {
        ProjectName::new(raw)
    }

    /// The name must also fit in a single path component on common filesystems.
    pub fn validate_request(request: &ProjectRequest) -> Result<(), DomainError> {
        let name = request.name().as_str();
        if name.len() > 255 {
            return Err(DomainError::InvalidProjectName {
                name: name.to_owned(),
                reason: "name is longer than 255 bytes".into(),
            });
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::common::RelativePath;

    #[test]
    fn rejects_overlong_names() {
        let req = ProjectRequest::builder("a".repeat(300)).build().unwrap();
        assert!(DomainValidator::validate_request(&req).is_err());
        let ok = ProjectRequest::builder("demo").build().unwrap();
        assert!(DomainValidator::validate_request(&ok).is_ok());
    }

    #[test]
    fn rejects_duplicate_files() {
        let path = RelativePath::try_new("README.md").unwrap();
        let structure = ProjectStructure::new("demo")
            .with_file(path.clone(), "a".into())
            .with_file(path, "b".into());
        assert!(matches!(
            DomainValidator::validate_project_structure(&structure),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn validate_name_delegates_to_value_object() {
        assert!(DomainValidator::validate_name("demo").is_ok());
        assert!(DomainValidator::validate_name(".hidden").is_err());
    }
}
