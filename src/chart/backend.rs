//! The chart-drawing seam.
//!
//! The dashboard never draws anything itself. It hands the charting
//! capability a drawing context and a `{type, data, options}` spec and gets
//! back a live instance, mirroring the construction contract of the
//! charting library the rendered page runs. `ChartJsBackend` materializes
//! that constructor argument as JSON for embedding into the output page.

use serde_json::json;

use crate::api::types::ChartDataset;
use crate::chart::options::{ChartKind, ChartOptions};
use crate::error::DashboardError;

/// Handle for the drawing destination, obtained from a chart surface.
#[derive(Debug, Clone)]
pub struct DrawingContext {
    element_id: String,
}

impl DrawingContext {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}

/// Everything one chart construction needs.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: ChartDataset,
    pub options: ChartOptions,
}

/// A constructed chart bound to one drawing context.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    config: serde_json::Value,
}

impl ChartInstance {
    pub fn new(config: serde_json::Value) -> Self {
        Self { config }
    }

    /// The `{type, data, options}` object the chart was constructed with.
    pub fn config(&self) -> &serde_json::Value {
        &self.config
    }
}

pub trait ChartBackend: Send + Sync {
    fn draw(
        &self,
        context: &DrawingContext,
        spec: ChartSpec,
    ) -> Result<ChartInstance, DashboardError>;
}

/// Backend that builds the Chart.js constructor argument verbatim.
#[derive(Debug, Default)]
pub struct ChartJsBackend;

impl ChartBackend for ChartJsBackend {
    fn draw(
        &self,
        _context: &DrawingContext,
        spec: ChartSpec,
    ) -> Result<ChartInstance, DashboardError> {
        let config = json!({
            "type": spec.kind.as_str(),
            "data": spec.data.0,
            "options": spec.options.0,
        });
        Ok(ChartInstance::new(config))
    }
}
