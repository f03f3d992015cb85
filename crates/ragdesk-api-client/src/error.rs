use reqwest::StatusCode;

/// Failure of a single backend request.
///
/// Every call is one attempt; a failed attempt surfaces as exactly one of
/// these, and the caller decides what (if anything) to do about it.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl RequestError {
    /// Status code of the response, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
