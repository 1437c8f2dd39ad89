// Error taxonomy for the client. Every failure is reported once and
// terminates the current branch of execution; there are no retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The caller supplied no usable image: no source flag, an
    /// unreadable file or URL, or an empty pixel grid.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The transport string could not be turned back into pixels:
    /// missing comma separator, bad base64, or an unrecognizable
    /// compressed stream.
    #[error("corrupt payload: {0}")]
    CorruptPayload(String),

    /// The server answered with a non-200 status. Surfaced directly to
    /// the user, never retried. Matches the backend's wording.
    #[error("Error {status} : {reason}")]
    ResponseError { status: u16, reason: String },

    /// A 200 reply was missing an expected field or carried one of the
    /// wrong type. Distinct from `ResponseError` so that a broken body
    /// is never mistaken for an HTTP-level failure.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The endpoint URL's trailing segment names no known task.
    /// Reported to the user, not fatal.
    #[error("Invalid Endpoint")]
    UnknownMode,
}

impl ClientError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        ClientError::MalformedResponse(detail.into())
    }
}
