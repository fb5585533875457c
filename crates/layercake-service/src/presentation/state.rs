use std::sync::Arc;

use crate::core::{config::Settings, di::Container};

/// Shared by every handler and middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    pub container: Arc<Container>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(container: Container, settings: Settings) -> Self {
        Self {
            container: Arc::new(container),
            settings: Arc::new(settings),
        }
    }
}
