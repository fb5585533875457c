use crate::application::health::dtos::HealthStatusDto;
use crate::domain::health::entities::HealthStatus;

pub struct HealthStatusMapper;

impl HealthStatusMapper {
    pub fn to_dto(entity: HealthStatus) -> HealthStatusDto {
        HealthStatusDto {
            id: entity.id,
            status: entity.status,
        }
    }

    pub fn to_domain(dto: HealthStatusDto) -> HealthStatus {
        HealthStatus {
            id: dto.id,
            status: dto.status,
        }
    }
}
