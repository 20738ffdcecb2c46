/// Errors reported by the remote product API adapter.
/// Display strings are user-facing; they end up in the store's error field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    RequestFailed { status: u16, message: Option<String> },
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Message used when the server gives no usable explanation.
pub const GENERIC_FAILURE: &str = "No data available";

impl GatewayError {
    pub fn request_failed(status: u16) -> Self {
        GatewayError::RequestFailed {
            status,
            message: None,
        }
    }
    pub fn request_failed_with(status: u16, message: impl Into<String>) -> Self {
        GatewayError::RequestFailed {
            status,
            message: Some(message.into()),
        }
    }
    pub fn network(detail: impl Into<String>) -> Self {
        GatewayError::NetworkFailure(detail.into())
    }
    pub fn malformed(detail: impl Into<String>) -> Self {
        GatewayError::MalformedResponse(detail.into())
    }
}

/// Errors raised when writing to the local key/value store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage write failed: {0}")]
    WriteFailed(String),
}
