use serde::{Deserialize, Serialize};

/// One pull request as returned by `GET /data`. The backend row carries
/// additional bookkeeping fields (ids, counts, timestamps) that the
/// dashboard never displays; deserialization ignores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestRecord {
    pub repo_name: String,
    pub author: String,
    #[serde(default)]
    pub team_name: Option<String>,
    pub pr_status: String,
    pub pr_title: String,
    pub pr_url: String,
}

impl PullRequestRecord {
    /// Team label for display. Absent or empty team names render as "N/A".
    pub fn team_label(&self) -> &str {
        match self.team_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "N/A",
        }
    }
}

/// Chart payload in the charting library's shape (labels plus one or more
/// series). Produced by the backend, passed through to the chart backend
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartDataset(pub serde_json::Value);

/// Body of `POST /add-team-mapping`. The backend expects camelCase for the
/// team field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMapping {
    pub username: String,
    #[serde(rename = "teamName")]
    pub team_name: String,
}
