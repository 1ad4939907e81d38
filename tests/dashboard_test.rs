//! Whole-startup tests: concurrent flows, failure isolation, page output.

mod common;

use std::sync::Arc;

use wiremock::MockServer;

use pr_dashboard::api::ApiClient;
use pr_dashboard::chart::ChartJsBackend;
use pr_dashboard::dashboard::{
    Dashboard, AUTHOR_CHART, DAILY_CHART, PR_TABLE_BODY, TEAM_STATS_CHART, WEEKLY_CHART,
};
use pr_dashboard::dom::{html, Document};
use pr_dashboard::DashboardError;

#[tokio::test]
async fn startup_renders_every_target() {
    let server = MockServer::start().await;
    common::mock_all_data_endpoints(&server).await;

    let dashboard = common::dashboard_for(&server).await;
    dashboard.run().await;

    let doc = dashboard.document().lock().await;
    assert_eq!(doc.table_body(PR_TABLE_BODY).unwrap().len(), 3);
    for id in [WEEKLY_CHART, AUTHOR_CHART, DAILY_CHART, TEAM_STATS_CHART] {
        assert!(
            doc.chart_surface(id).unwrap().chart().is_some(),
            "no chart on {}",
            id
        );
    }
}

#[tokio::test]
async fn failing_flow_leaves_the_others_unaffected() {
    let server = MockServer::start().await;
    common::mock_get_status(&server, "/data", 500).await;
    common::mock_get(&server, "/data/weekly-stats", common::sample_dataset()).await;
    common::mock_get_status(&server, "/data/author-breakdown", 404).await;
    common::mock_get(&server, "/data/daily-counts", common::sample_dataset()).await;
    common::mock_get(&server, "/data/weekly-stats-by-team", common::sample_dataset()).await;

    let dashboard = common::dashboard_for(&server).await;
    dashboard.run().await;

    let doc = dashboard.document().lock().await;
    assert!(doc.table_body(PR_TABLE_BODY).unwrap().is_empty());
    assert!(doc.chart_surface(AUTHOR_CHART).unwrap().chart().is_none());
    assert!(doc.chart_surface(WEEKLY_CHART).unwrap().chart().is_some());
    assert!(doc.chart_surface(DAILY_CHART).unwrap().chart().is_some());
    assert!(doc.chart_surface(TEAM_STATS_CHART).unwrap().chart().is_some());
}

#[tokio::test]
async fn initialize_rejects_a_document_missing_targets() {
    let server = MockServer::start().await;

    let result = Dashboard::initialize(
        ApiClient::new(server.uri()),
        Arc::new(ChartJsBackend),
        Document::new().into_shared(),
    )
    .await;

    assert!(matches!(result, Err(DashboardError::TargetNotFound(_))));
}

#[tokio::test]
async fn rendered_page_contains_rows_and_chart_configs() {
    let server = MockServer::start().await;
    common::mock_all_data_endpoints(&server).await;

    let dashboard = common::dashboard_for(&server).await;
    dashboard.run().await;

    let doc = dashboard.document().lock().await;
    let page = html::render_page(&doc, "GitHub Pull Requests Dashboard").unwrap();

    assert!(page.contains("<td>svc</td>"));
    assert!(page.contains("<td>N/A</td>"));
    assert!(page.contains("data-chart-for=\"weeklyPrChartByTeam\""));
    assert!(page.contains("<canvas id=\"dailyPrChart\">"));
    assert!(page.contains("<form id=\"teamMappingForm\">"));
}
