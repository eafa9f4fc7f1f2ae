use thiserror::Error;

/// Errors that can occur while fetching countries from upstream.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP client could not be built from configuration
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL is unusable for building request paths
    #[error("Invalid base URL '{url}'")]
    InvalidUrl { url: String },

    /// Transport failure (DNS, connect, timeout, ...)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Short machine-readable label, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Client(_) => "client",
            SourceError::InvalidUrl { .. } => "invalid_url",
            SourceError::Request { .. } => "request",
            SourceError::Status { .. } => "status",
            SourceError::Decode { .. } => "decode",
        }
    }
}
