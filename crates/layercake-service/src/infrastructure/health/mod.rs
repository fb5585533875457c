pub mod health_check_adapter;

pub use health_check_adapter::HealthCheckAdapter;
