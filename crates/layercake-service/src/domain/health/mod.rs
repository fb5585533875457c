pub mod entities;
pub mod ports;

pub use entities::HealthStatus;
pub use ports::HealthCheckPort;
