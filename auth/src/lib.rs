//! Authentication primitives library
//!
//! Provides the building blocks for credential-based authentication:
//! - Password hashing and verification (Argon2id)
//! - A secret-agnostic JWT codec with a closed claim schema
//! - Dual-token issuance (access + refresh) and stateless refresh
//!
//! The HTTP service defines its own strategies and wiring on top of these
//! primitives; nothing in this crate performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Token Lifecycle
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_secret_at_least_32_bytes_long!",
//!     b"refresh_secret_at_least_32_bytes_lon!",
//!     1,
//!     24,
//! )
//! .unwrap();
//!
//! // Issue a pair for an authenticated subject.
//! let pair = issuer.issue("user123", "alice", "alice@example.com").unwrap();
//!
//! // Validate the access token on a protected request.
//! let claims = issuer.verify_access(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//!
//! // Mint a new access token from the refresh token alone.
//! let refreshed = issuer.refresh(&pair.refresh_token).unwrap();
//! assert_eq!(refreshed.refresh_token, pair.refresh_token);
//! ```

pub mod issuer;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use issuer::IssuerError;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenCodec;
pub use token::TokenError;
