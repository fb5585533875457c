use crate::domain::health::entities::HealthStatus;
use crate::domain::health::ports::HealthCheckPort;

/// Always healthy while the process is serving.
#[derive(Debug, Default)]
pub struct HealthCheckAdapter;

impl HealthCheckAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl HealthCheckPort for HealthCheckAdapter {
    fn check(&self) -> HealthStatus {
        HealthStatus::ok()
    }
}
