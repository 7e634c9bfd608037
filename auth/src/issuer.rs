use chrono::Duration;

use crate::token::TokenClaims;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Issues and refreshes access/refresh token pairs.
///
/// Holds one codec per secret. The two secrets must differ, so possession
/// of a token from one flow never allows forging or verifying a token from
/// the other. Every operation is pure over its inputs; the issuer is safe
/// to share across concurrent requests without locking.
pub struct TokenIssuer {
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

/// A freshly signed access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer credential presented on every protected request
    pub access_token: String,

    /// Long-lived credential used solely to mint new access tokens
    pub refresh_token: String,
}

/// Configuration errors raised when constructing a [`TokenIssuer`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum IssuerError {
    #[error("Access and refresh token secrets must differ")]
    IdenticalSecrets,

    #[error("Token expiration must be positive")]
    NonPositiveExpiration,
}

impl TokenIssuer {
    /// Create an issuer over two independent secrets.
    ///
    /// The refresh expiration is a multiple of the access expiration.
    ///
    /// # Arguments
    /// * `access_secret` - Secret for the access-token flow
    /// * `refresh_secret` - Secret for the refresh-token flow
    /// * `access_expiration_hours` - Access token lifetime
    /// * `refresh_multiplier` - Refresh lifetime as a multiple of the access lifetime
    ///
    /// # Errors
    /// * `IdenticalSecrets` - the two secrets are equal
    /// * `NonPositiveExpiration` - a zero or negative lifetime was configured
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_expiration_hours: i64,
        refresh_multiplier: i64,
    ) -> Result<Self, IssuerError> {
        if access_secret == refresh_secret {
            return Err(IssuerError::IdenticalSecrets);
        }

        if access_expiration_hours <= 0 || refresh_multiplier <= 0 {
            return Err(IssuerError::NonPositiveExpiration);
        }

        Ok(Self {
            access_codec: TokenCodec::new(access_secret),
            refresh_codec: TokenCodec::new(refresh_secret),
            access_ttl: Duration::hours(access_expiration_hours),
            refresh_ttl: Duration::hours(access_expiration_hours * refresh_multiplier),
        })
    }

    /// Issue a token pair for an authenticated subject.
    ///
    /// Only the subject's identifier, display name and email enter the
    /// claims; each flavor is signed with its own secret and expiration.
    ///
    /// # Errors
    /// * `EncodingFailed` - signing failed
    pub fn issue(
        &self,
        sub: impl ToString,
        name: &str,
        email: &str,
    ) -> Result<TokenPair, TokenError> {
        let sub = sub.to_string();

        let access_claims = TokenClaims::issue(&sub, name, email, self.access_ttl);
        let refresh_claims = TokenClaims::issue(&sub, name, email, self.refresh_ttl);

        Ok(TokenPair {
            access_token: self.access_codec.sign(&access_claims)?,
            refresh_token: self.refresh_codec.sign(&refresh_claims)?,
        })
    }

    /// Mint a new access token from a valid refresh token.
    ///
    /// Verifies against the refresh secret, drops the old timestamps and
    /// re-signs the retained subject claims with the access secret. The
    /// refresh token is echoed back unchanged (non-rotating policy); no
    /// user store lookup happens here.
    ///
    /// # Errors
    /// * `Expired` / `InvalidSignature` / `Malformed` - the refresh token
    ///   failed verification
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        let claims: TokenClaims = self.refresh_codec.verify(refresh_token)?;

        let access_token = self.access_codec.sign(&claims.reissue(self.access_ttl))?;

        Ok(TokenPair {
            access_token,
            refresh_token: refresh_token.to_string(),
        })
    }

    /// Verify an access token and return its claims.
    pub fn verify_access(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.access_codec.verify(token)
    }

    /// Verify a refresh token and return its claims.
    pub fn verify_refresh(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.refresh_codec.verify(token)
    }

    /// Lifetime of refresh tokens, also the refresh cookie max-age.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCESS_SECRET: &[u8] = b"access_secret_at_least_32_bytes_long!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_at_least_32_bytes_lon!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(ACCESS_SECRET, REFRESH_SECRET, 1, 24).expect("Failed to build issuer")
    }

    #[test]
    fn test_identical_secrets_are_rejected() {
        let result = TokenIssuer::new(ACCESS_SECRET, ACCESS_SECRET, 1, 24);
        assert!(matches!(result, Err(IssuerError::IdenticalSecrets)));
    }

    #[test]
    fn test_non_positive_expiration_is_rejected() {
        let result = TokenIssuer::new(ACCESS_SECRET, REFRESH_SECRET, 0, 24);
        assert!(matches!(result, Err(IssuerError::NonPositiveExpiration)));
    }

    #[test]
    fn test_issue_produces_verifiable_pair() {
        let issuer = issuer();

        let pair = issuer
            .issue("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        let access = issuer
            .verify_access(&pair.access_token)
            .expect("Failed to verify access token");
        assert_eq!(access.sub, "user123");
        assert_eq!(access.name, "alice");
        assert_eq!(access.email, "alice@example.com");

        let refresh = issuer
            .verify_refresh(&pair.refresh_token)
            .expect("Failed to verify refresh token");
        assert_eq!(refresh.sub, "user123");
        assert_eq!(refresh.exp - refresh.iat, 24 * (access.exp - access.iat));
    }

    #[test]
    fn test_tokens_are_not_interchangeable() {
        let issuer = issuer();

        let pair = issuer
            .issue("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        assert!(issuer.verify_access(&pair.refresh_token).is_err());
        assert!(issuer.verify_refresh(&pair.access_token).is_err());
    }

    #[test]
    fn test_refresh_preserves_subject_claims() {
        let issuer = issuer();

        let pair = issuer
            .issue("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        let refreshed = issuer
            .refresh(&pair.refresh_token)
            .expect("Failed to refresh");

        let original = issuer
            .verify_access(&pair.access_token)
            .expect("Failed to verify original access token");
        let minted = issuer
            .verify_access(&refreshed.access_token)
            .expect("Failed to verify minted access token");

        assert_eq!(minted.sub, original.sub);
        assert_eq!(minted.name, original.name);
        assert_eq!(minted.email, original.email);
    }

    #[test]
    fn test_refresh_echoes_same_refresh_token() {
        let issuer = issuer();

        let pair = issuer
            .issue("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        let refreshed = issuer
            .refresh(&pair.refresh_token)
            .expect("Failed to refresh");
        assert_eq!(refreshed.refresh_token, pair.refresh_token);
    }

    #[test]
    fn test_refresh_with_access_token_fails() {
        let issuer = issuer();

        let pair = issuer
            .issue("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        let result = issuer.refresh(&pair.access_token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_refresh_with_tampered_token_fails() {
        let issuer = issuer();

        let pair = issuer
            .issue("user123", "alice", "alice@example.com")
            .expect("Failed to issue pair");

        let mut tampered = pair.refresh_token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(issuer.refresh(&tampered).is_err());
    }
}
