use thiserror::Error;

/// Errors that can occur when looking up or querying Flyby results
#[derive(Debug, Error)]
pub enum FlybyError {
    #[error("Flyby returned {status}")]
    Connectivity { status: u16 },

    #[error("Malformed Flyby response: {0}")]
    MalformedResponse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlybyError {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a new malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Whether the failure came from the upstream service rather than the caller
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Connectivity { .. } | Self::MalformedResponse(_) | Self::Request(_)
        )
    }
}

/// A specialized Result type for Flyby operations
pub type Result<T> = std::result::Result<T, FlybyError>;
