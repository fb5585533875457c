use crate::domain::{entities::ArtifactPlan, error::DomainError, layout::ProjectLayout};

/// Centralized domain validation.
///
/// Checks that span more than one entity live here.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_layout(layout: &ProjectLayout) -> Result<(), DomainError> {
        if layout.container_file() == layout.router_file() {
            return Err(DomainError::DuplicatePath {
                path: layout.container_file().to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_plan(plan: &ArtifactPlan, layout: &ProjectLayout) -> Result<(), DomainError> {
        Self::validate_layout(layout)?;
        plan.validate()
    }
}
