//! Chart Renderer flows.
//!
//! The generic flow fetches a dataset and constructs one chart through the
//! pluggable backend. Explicit options pass through unmodified; omitted
//! options resolve to the kind's defaults. The team-stats flow is the same
//! shape with everything fixed.

use tracing::{error, info};

use crate::api::ApiClient;
use crate::chart::{ChartBackend, ChartKind, ChartOptions, ChartSpec};
use crate::dashboard::TEAM_STATS_CHART;
use crate::dom::SharedDocument;
use crate::error::DashboardError;

/// Fetch a dataset from `endpoint` and render it on the surface named by
/// `target_id`. Failures are logged and leave the target unrendered.
pub async fn render_chart(
    client: &ApiClient,
    document: &SharedDocument,
    backend: &dyn ChartBackend,
    endpoint: &str,
    target_id: &str,
    kind: ChartKind,
    options: Option<ChartOptions>,
) {
    if let Err(err) = try_render(client, document, backend, endpoint, target_id, kind, options).await
    {
        error!("Error fetching chart data from {}: {}", endpoint, err);
    }
}

async fn try_render(
    client: &ApiClient,
    document: &SharedDocument,
    backend: &dyn ChartBackend,
    endpoint: &str,
    target_id: &str,
    kind: ChartKind,
    options: Option<ChartOptions>,
) -> Result<(), DashboardError> {
    let data = client.chart_dataset(endpoint).await?;
    let options = ChartOptions::resolve(options, kind);

    let mut doc = document.lock().await;
    let surface = doc.chart_surface_mut(target_id)?;
    let context = surface.context();
    let instance = backend.draw(&context, ChartSpec { kind, data, options })?;
    // mount destroys any previous instance on this surface
    surface.mount(instance);

    info!("Rendered {} chart on {}", kind, target_id);
    Ok(())
}

/// Weekly stats by team: fixed endpoint, fixed target, stacked bar chart.
pub async fn render_team_stats_chart(
    client: &ApiClient,
    document: &SharedDocument,
    backend: &dyn ChartBackend,
) {
    render_chart(
        client,
        document,
        backend,
        "/data/weekly-stats-by-team",
        TEAM_STATS_CHART,
        ChartKind::Bar,
        Some(ChartOptions::stacked_axes()),
    )
    .await
}
