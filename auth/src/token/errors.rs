use thiserror::Error;

/// Error type for token codec operations.
///
/// Verification failures are kept distinct so the server can log the exact
/// cause; the HTTP layer collapses them into one generic message.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
