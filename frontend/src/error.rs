use thiserror::Error;

/// Every way a call to the notes service can fail.
///
/// The variants only refine the message; callers treat them alike.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Could not build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
