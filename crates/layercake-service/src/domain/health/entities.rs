use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub id: Option<String>,
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            id: None,
            status: "Ok".to_string(),
        }
    }
}
