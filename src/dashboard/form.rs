//! Form Handler flow: team-mapping submissions.

use tracing::{error, info};

use crate::api::types::TeamMapping;
use crate::api::ApiClient;
use crate::dashboard::{TEAM_MAPPING_FORM, TEAM_NAME_INPUT, USERNAME_INPUT};
use crate::dom::{Document, SharedDocument, SubmitEvent};
use crate::error::DashboardError;

/// Attach the single submission listener to the mapping form. Attaching
/// twice is an error.
pub fn register_submission_listener(document: &mut Document) -> Result<(), DashboardError> {
    document.form_mut(TEAM_MAPPING_FORM)?.attach_listener()
}

/// Handle one submission: suppress the default action, read the two field
/// values as-is, and POST them as a mapping. Success and failure are both
/// log-only; there is no UI feedback, no form reset, and no in-flight
/// suppression of a second submission.
pub async fn handle_mapping_submit(
    client: &ApiClient,
    document: &SharedDocument,
    event: &mut SubmitEvent,
) {
    event.prevent_default();

    if let Err(err) = try_submit(client, document).await {
        error!("Error submitting team mapping: {}", err);
    }
}

async fn try_submit(client: &ApiClient, document: &SharedDocument) -> Result<(), DashboardError> {
    let mapping = {
        let doc = document.lock().await;
        TeamMapping {
            username: doc.input_value(USERNAME_INPUT)?,
            team_name: doc.input_value(TEAM_NAME_INPUT)?,
        }
    };

    let ack = client.add_team_mapping(&mapping).await?;
    info!("Team mapping stored: {}", ack);
    Ok(())
}
