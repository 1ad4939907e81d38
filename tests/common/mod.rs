//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pr_dashboard::api::ApiClient;
use pr_dashboard::chart::ChartJsBackend;
use pr_dashboard::dashboard::Dashboard;
use pr_dashboard::dom::{Document, SharedDocument};

pub fn sample_records() -> Value {
    json!([
        {
            "repo_name": "svc",
            "author": "alice",
            "team_name": "platform",
            "pr_status": "open",
            "pr_title": "fix bug",
            "pr_url": "http://x/1"
        },
        {
            "repo_name": "web",
            "author": "bob",
            "team_name": null,
            "pr_status": "merged",
            "pr_title": "add feature",
            "pr_url": "http://x/2"
        },
        {
            "repo_name": "api",
            "author": "carol",
            "team_name": "",
            "pr_status": "closed",
            "pr_title": "cleanup",
            "pr_url": "http://x/3"
        }
    ])
}

pub fn sample_dataset() -> Value {
    json!({
        "labels": ["This Week", "Older"],
        "datasets": [
            {
                "label": "PR Counts",
                "data": [4, 11],
                "backgroundColor": ["#4e79a7", "#f28e2b"]
            }
        ]
    })
}

pub async fn mock_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mock_get_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Stand up every read endpoint the dashboard consumes.
pub async fn mock_all_data_endpoints(server: &MockServer) {
    mock_get(server, "/data", sample_records()).await;
    mock_get(server, "/data/weekly-stats", sample_dataset()).await;
    mock_get(server, "/data/author-breakdown", sample_dataset()).await;
    mock_get(server, "/data/daily-counts", sample_dataset()).await;
    mock_get(server, "/data/weekly-stats-by-team", sample_dataset()).await;
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri())
}

pub fn shared_page() -> SharedDocument {
    Document::dashboard_page().into_shared()
}

pub async fn dashboard_for(server: &MockServer) -> Dashboard {
    Dashboard::initialize(client_for(server), Arc::new(ChartJsBackend), shared_page())
        .await
        .expect("dashboard initialization failed")
}
