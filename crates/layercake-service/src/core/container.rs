//! Dependency registry.
//!
//! `layercake scaffold` appends imports and providers before the anchors.

use crate::application::health::use_cases::CheckHealthUseCase;
use crate::core::di::{Container, Registry};
use crate::infrastructure::health::HealthCheckAdapter;
// layercake:imports

pub fn build_container() -> Container {
    let mut registry = Registry::default();

    let health_adapter = registry.singleton(HealthCheckAdapter::new());
    registry.singleton(CheckHealthUseCase::new(health_adapter.clone()));
    // layercake:providers

    registry.into_container()
}
