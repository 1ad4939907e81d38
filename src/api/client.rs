//! HTTP client for the dashboard backend.
//!
//! Thin wrapper over `reqwest` for the same-origin JSON endpoints. No
//! retries, no caching, no auth; timeouts are whatever the HTTP library
//! defaults to.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::types::{ChartDataset, PullRequestRecord, TeamMapping};
use crate::error::DashboardError;

pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http_client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all pull request records from `GET /data`.
    pub async fn pull_requests(&self) -> Result<Vec<PullRequestRecord>, DashboardError> {
        self.get_json("/data").await
    }

    /// Fetch a chart dataset from one of the `GET /data/*` endpoints.
    pub async fn chart_dataset(&self, path: &str) -> Result<ChartDataset, DashboardError> {
        self.get_json(path).await
    }

    /// Post a username-to-team mapping to `POST /add-team-mapping` and
    /// return the backend's JSON acknowledgment.
    pub async fn add_team_mapping(
        &self,
        mapping: &TeamMapping,
    ) -> Result<serde_json::Value, DashboardError> {
        let path = "/add-team-mapping";
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(mapping)
            .send()
            .await
            .map_err(|e| DashboardError::transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::StatusError {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| DashboardError::parse(path, e))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::StatusError {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| DashboardError::parse(path, e))
    }
}
