pub mod backend;
pub mod options;

pub use backend::{ChartBackend, ChartInstance, ChartJsBackend, ChartSpec, DrawingContext};
pub use options::{ChartKind, ChartOptions};
