use axum::http::HeaderMap;
use thiserror::Error;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";

/// The request headers copied to the upstream call. Nothing else is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardHeaders {
    pub content_type: String,
    pub api_key: String,
    pub anthropic_version: String,
}

impl ForwardHeaders {
    pub fn from_request(headers: &HeaderMap) -> Self {
        let read = |name: &str, default: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            content_type: read("content-type", DEFAULT_CONTENT_TYPE),
            api_key: read("x-api-key", ""),
            anthropic_version: read("anthropic-version", DEFAULT_ANTHROPIC_VERSION),
        }
    }
}

// Upstream HTTP error statuses are relayed, not raised; these are the rest
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Upstream request timed out")]
    Timeout,
    #[error("Upstream unreachable: {0}")]
    Transport(String),
    #[error("Invalid upstream URL: {0}")]
    InvalidTarget(String),
    #[error("Failed to read request body: {0}")]
    Body(String),
}
