use axum::http::header;
use axum::http::HeaderMap;

/// Refresh-cookie attributes, fixed at startup from configuration.
///
/// The refresh token travels in a dedicated http-only cookie rather than a
/// header; `secure` is enabled in production-equivalent environments and
/// the max-age equals the refresh token lifetime.
#[derive(Debug, Clone)]
pub struct RefreshCookie {
    pub name: String,
    pub secure: bool,
    pub max_age_secs: i64,
}

impl RefreshCookie {
    /// Render a Set-Cookie value carrying the refresh token.
    pub fn set(&self, token: &str) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; Max-Age={}",
            self.name, token, self.max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Render a Set-Cookie value that clears the cookie.
    pub fn clear(&self) -> String {
        let mut cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", self.name);
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Extract the refresh token from a request's Cookie header, if present.
    pub fn extract<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        let cookie_str = headers.get(header::COOKIE)?.to_str().ok()?;

        for cookie in cookie_str.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if name == self.name {
                    return Some(value);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn cookie() -> RefreshCookie {
        RefreshCookie {
            name: "refresh_token".to_string(),
            secure: false,
            max_age_secs: 86400,
        }
    }

    #[test]
    fn test_set_renders_attributes() {
        let value = cookie().set("abc.def.ghi");
        assert_eq!(
            value,
            "refresh_token=abc.def.ghi; Path=/; HttpOnly; Max-Age=86400"
        );
    }

    #[test]
    fn test_secure_flag_is_appended() {
        let mut secure = cookie();
        secure.secure = true;
        assert!(secure.set("t").ends_with("; Secure"));
        assert!(secure.clear().ends_with("; Secure"));
    }

    #[test]
    fn test_clear_expires_immediately() {
        let value = cookie().clear();
        assert!(value.contains("Max-Age=0"));
        assert!(value.starts_with("refresh_token=;"));
    }

    #[test]
    fn test_extract_finds_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; refresh_token=abc.def.ghi; session=2"),
        );

        assert_eq!(cookie().extract(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_missing_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("other=1"));

        assert_eq!(cookie().extract(&headers), None);
    }

    #[test]
    fn test_extract_no_header() {
        assert_eq!(cookie().extract(&HeaderMap::new()), None);
    }
}
