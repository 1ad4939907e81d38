//! Chart surfaces (the canvas elements of the document contract).

use crate::chart::backend::{ChartInstance, DrawingContext};

/// A drawing destination identified by element id. Holds at most one live
/// chart instance; mounting a new one destroys the previous instance first,
/// so re-rendering a surface is defined behavior.
#[derive(Debug, Clone, Default)]
pub struct ChartSurface {
    id: String,
    chart: Option<ChartInstance>,
}

impl ChartSurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chart: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn context(&self) -> DrawingContext {
        DrawingContext::new(self.id.clone())
    }

    /// Destroy the current chart, if any. Returns the destroyed instance.
    pub fn destroy(&mut self) -> Option<ChartInstance> {
        self.chart.take()
    }

    pub fn mount(&mut self, instance: ChartInstance) {
        self.destroy();
        self.chart = Some(instance);
    }

    pub fn chart(&self) -> Option<&ChartInstance> {
        self.chart.as_ref()
    }
}
