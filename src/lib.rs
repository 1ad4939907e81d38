pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dom;
pub mod error;

pub use error::DashboardError;
