use std::sync::Arc;

use crate::application::health::use_cases::CheckHealthUseCase;
use crate::core::di::Container;
use crate::presentation::shared::errors::AppError;
use crate::presentation::v1::schemas::health_response::HealthResponse;

pub struct HealthController {
    check_use_case: Arc<CheckHealthUseCase>,
}

impl HealthController {
    pub fn from_container(container: &Container) -> Result<Self, AppError> {
        Ok(Self {
            check_use_case: container.require::<CheckHealthUseCase>()?,
        })
    }

    pub fn check(&self) -> HealthResponse {
        let dto = self.check_use_case.execute();
        HealthResponse {
            status: dto.status,
            version: crate::VERSION.to_string(),
        }
    }
}
