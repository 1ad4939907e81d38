//! Table Renderer flow: `GET /data` into the PR table body.

use tracing::{error, info};

use crate::api::types::PullRequestRecord;
use crate::api::ApiClient;
use crate::dashboard::PR_TABLE_BODY;
use crate::dom::{SharedDocument, TableCell, TableRow};
use crate::error::DashboardError;

/// Fetch all PR records and append one row per record, in backend order.
/// Failures are logged and leave the table body as it was.
pub async fn render_pull_request_table(client: &ApiClient, document: &SharedDocument) {
    if let Err(err) = try_render(client, document).await {
        error!("Error fetching PR data: {}", err);
    }
}

async fn try_render(client: &ApiClient, document: &SharedDocument) -> Result<(), DashboardError> {
    let records = client.pull_requests().await?;

    let mut doc = document.lock().await;
    let body = doc.table_body_mut(PR_TABLE_BODY)?;
    for record in &records {
        body.append_row(pull_request_row(record));
    }

    info!("Rendered {} pull request rows", records.len());
    Ok(())
}

/// One record, one row: repo, author, team (or "N/A"), status, title, link.
pub fn pull_request_row(record: &PullRequestRecord) -> TableRow {
    TableRow::new(vec![
        TableCell::text(&record.repo_name),
        TableCell::text(&record.author),
        TableCell::text(record.team_label()),
        TableCell::text(&record.pr_status),
        TableCell::text(&record.pr_title),
        TableCell::link(&record.pr_url, "Link"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(team_name: Option<&str>) -> PullRequestRecord {
        PullRequestRecord {
            repo_name: "svc".to_string(),
            author: "alice".to_string(),
            team_name: team_name.map(str::to_string),
            pr_status: "open".to_string(),
            pr_title: "fix bug".to_string(),
            pr_url: "http://x/1".to_string(),
        }
    }

    #[test]
    fn row_has_six_cells_in_field_order() {
        let row = pull_request_row(&record(Some("platform")));
        let texts: Vec<_> = row.cells().iter().map(|c| c.text_content()).collect();
        assert_eq!(texts, ["svc", "alice", "platform", "open", "fix bug", "Link"]);
        assert_eq!(
            row.cell(5),
            Some(&TableCell::link("http://x/1", "Link"))
        );
    }

    #[test]
    fn missing_team_renders_na_in_third_cell() {
        let row = pull_request_row(&record(None));
        assert_eq!(row.cell(2).unwrap().text_content(), "N/A");
    }
}
