use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error for {path}: {message}")]
    TransportError { path: String, message: String },

    #[error("Unexpected status {status} from {path}")]
    StatusError { path: String, status: u16 },

    #[error("Failed to parse response from {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Document target not found: {0}")]
    TargetNotFound(String),

    #[error("Form error: {0}")]
    FormError(String),

    #[error("Chart construction error: {0}")]
    ChartError(String),
}

impl DashboardError {
    pub fn transport(path: &str, err: impl std::fmt::Display) -> Self {
        Self::TransportError {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(path: &str, err: impl std::fmt::Display) -> Self {
        Self::ParseError {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
