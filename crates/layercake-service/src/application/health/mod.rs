pub mod dtos;
pub mod mappers;
pub mod use_cases;

pub use dtos::HealthStatusDto;
pub use mappers::HealthStatusMapper;
