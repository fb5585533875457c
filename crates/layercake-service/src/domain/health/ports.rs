use super::entities::HealthStatus;

/// Reports whether the service can answer requests.
pub trait HealthCheckPort: Send + Sync {
    fn check(&self) -> HealthStatus;
}
