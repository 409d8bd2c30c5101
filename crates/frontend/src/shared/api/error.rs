use thiserror::Error;

/// Failure taxonomy for platform API calls.
///
/// Every variant ends up as an inline display string; nothing is retried
/// automatically. `Timeout` and `Cancelled` are distinct so that a bounded
/// timeout and an unmounted component are never reported as server errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("request timed out")]
    Timeout,
    #[error("request cancelled")]
    Cancelled,
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
