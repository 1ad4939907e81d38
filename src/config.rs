use serde::{Deserialize, Serialize};
use std::env;

use crate::error::DashboardError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, DashboardError> {
        let base_url = env::var("DASHBOARD_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        if base_url.is_empty() {
            return Err(DashboardError::ConfigError(
                "DASHBOARD_BASE_URL must not be empty".to_string(),
            ));
        }

        Ok(AppConfig { base_url })
    }
}
