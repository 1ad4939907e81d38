//! Chart kinds and their default presentation options.

use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }

    /// Options used when a caller renders this kind without supplying any.
    /// Kinds without a documented default get an empty options object.
    pub fn default_options(&self) -> ChartOptions {
        match self {
            ChartKind::Bar => ChartOptions(json!({
                "scales": {
                    "y": { "beginAtZero": true }
                },
                "plugins": {
                    "legend": { "display": true }
                }
            })),
            ChartKind::Line => ChartOptions(json!({
                "scales": {
                    "y": { "beginAtZero": true }
                },
                "elements": {
                    "line": { "tension": 0.4 }
                }
            })),
            ChartKind::Pie => ChartOptions(json!({
                "plugins": {
                    "legend": { "position": "top" }
                }
            })),
            _ => ChartOptions::empty(),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options object handed to the chart backend. Opaque to this crate: the
/// charting capability interprets the recognized keys (scales, plugins,
/// elements). Explicit options are passed through unmodified; defaults are
/// never merged into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartOptions(pub serde_json::Value);

impl ChartOptions {
    pub fn empty() -> Self {
        ChartOptions(json!({}))
    }

    /// Stacked x/y axes, used by the team-stats chart. The grouped
    /// (non-stacked) alternative is simply the bar defaults.
    pub fn stacked_axes() -> Self {
        ChartOptions(json!({
            "scales": {
                "x": { "stacked": true },
                "y": { "stacked": true }
            }
        }))
    }

    /// Resolve the options for one render: explicit options win, absent
    /// options fall back to the kind's defaults.
    pub fn resolve(explicit: Option<ChartOptions>, kind: ChartKind) -> ChartOptions {
        explicit.unwrap_or_else(|| kind.default_options())
    }
}
