use std::sync::Arc;

use crate::application::health::dtos::HealthStatusDto;
use crate::application::health::mappers::HealthStatusMapper;
use crate::domain::health::ports::HealthCheckPort;

pub struct CheckHealthUseCase {
    port: Arc<dyn HealthCheckPort>,
}

impl CheckHealthUseCase {
    pub fn new(port: Arc<dyn HealthCheckPort>) -> Self {
        Self { port }
    }

    pub fn execute(&self) -> HealthStatusDto {
        HealthStatusMapper::to_dto(self.port.check())
    }
}
