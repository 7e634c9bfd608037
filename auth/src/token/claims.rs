use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// The claim set embedded in every signed token.
///
/// This is a closed schema: exactly the minimal subject projection
/// (identifier, display name, email) plus the timestamps stamped at signing
/// time. Tokens carrying any other field are rejected during decoding, and
/// the password hash can never appear here by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TokenClaims {
    /// Subject identifier
    pub sub: String,

    /// Subject display name
    pub name: String,

    /// Subject email address
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for a subject, stamping issue and expiry times now.
    ///
    /// # Arguments
    /// * `sub` - Subject identifier
    /// * `name` - Subject display name
    /// * `email` - Subject email address
    /// * `ttl` - Time until the token expires
    pub fn issue(sub: impl ToString, name: &str, email: &str, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: sub.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Re-stamp these claims for a newly signed token.
    ///
    /// Keeps the subject projection and discards the issuance-only fields,
    /// which must never be carried over from the token being refreshed.
    pub fn reissue(&self, ttl: Duration) -> Self {
        Self::issue(&self.sub, &self.name, &self.email, ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_stamps_expiry() {
        let claims = TokenClaims::issue("user123", "alice", "alice@example.com", Duration::hours(1));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_reissue_keeps_subject_fields() {
        let original =
            TokenClaims::issue("user123", "alice", "alice@example.com", Duration::hours(24));
        let reissued = original.reissue(Duration::hours(1));

        assert_eq!(reissued.sub, original.sub);
        assert_eq!(reissued.name, original.name);
        assert_eq!(reissued.email, original.email);
        assert_eq!(reissued.exp - reissued.iat, 60 * 60);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let json = r#"{
            "sub": "user123",
            "name": "alice",
            "email": "alice@example.com",
            "iat": 1,
            "exp": 2,
            "role": "admin"
        }"#;

        let result = serde_json::from_str::<TokenClaims>(json);
        assert!(result.is_err());
    }
}
