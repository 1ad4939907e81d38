//! The dashboard client itself: one startup routine, four independent
//! fetch-and-render flows.

pub mod charts;
pub mod form;
pub mod table;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::chart::{ChartBackend, ChartKind};
use crate::dom::{SharedDocument, SubmitEvent};
use crate::error::DashboardError;

pub const PR_TABLE_BODY: &str = "prTableBody";
pub const WEEKLY_CHART: &str = "weeklyPrChart";
pub const AUTHOR_CHART: &str = "authorPrChart";
pub const DAILY_CHART: &str = "dailyPrChart";
pub const TEAM_STATS_CHART: &str = "weeklyPrChartByTeam";
pub const TEAM_MAPPING_FORM: &str = "teamMappingForm";
pub const USERNAME_INPUT: &str = "username";
pub const TEAM_NAME_INPUT: &str = "teamName";

/// Element ids the page contract guarantees before the client runs.
pub const REQUIRED_TARGETS: [&str; 8] = [
    PR_TABLE_BODY,
    WEEKLY_CHART,
    AUTHOR_CHART,
    DAILY_CHART,
    TEAM_STATS_CHART,
    TEAM_MAPPING_FORM,
    USERNAME_INPUT,
    TEAM_NAME_INPUT,
];

pub struct Dashboard {
    client: ApiClient,
    backend: Arc<dyn ChartBackend>,
    document: SharedDocument,
}

impl Dashboard {
    /// Startup routine. Verifies every required target exists and attaches
    /// the single form-submission listener. Nothing is fetched yet; no
    /// hidden side effects beyond the listener registration.
    pub async fn initialize(
        client: ApiClient,
        backend: Arc<dyn ChartBackend>,
        document: SharedDocument,
    ) -> Result<Self, DashboardError> {
        {
            let mut doc = document.lock().await;
            doc.require(&REQUIRED_TARGETS)?;
            form::register_submission_listener(&mut doc)?;
        }

        Ok(Self {
            client,
            backend,
            document,
        })
    }

    /// Run all fetch-and-render flows concurrently. Flows race, write to
    /// disjoint document subtrees, and each logs its own failures; a
    /// failing flow never affects the others.
    pub async fn run(&self) {
        tokio::join!(
            table::render_pull_request_table(&self.client, &self.document),
            charts::render_chart(
                &self.client,
                &self.document,
                self.backend.as_ref(),
                "/data/weekly-stats",
                WEEKLY_CHART,
                ChartKind::Bar,
                None,
            ),
            charts::render_chart(
                &self.client,
                &self.document,
                self.backend.as_ref(),
                "/data/author-breakdown",
                AUTHOR_CHART,
                ChartKind::Pie,
                None,
            ),
            charts::render_chart(
                &self.client,
                &self.document,
                self.backend.as_ref(),
                "/data/daily-counts",
                DAILY_CHART,
                ChartKind::Line,
                None,
            ),
            charts::render_team_stats_chart(&self.client, &self.document, self.backend.as_ref()),
        );
    }

    /// Entry point for a form submission event from the host.
    pub async fn submit_team_mapping(&self, event: &mut SubmitEvent) {
        form::handle_mapping_submit(&self.client, &self.document, event).await;
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
