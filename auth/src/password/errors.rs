use thiserror::Error;

/// Error type for password operations.
///
/// Verification never fails with an error; a hash that cannot be parsed
/// compares as false. Only hashing itself can error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
