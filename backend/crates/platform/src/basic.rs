//! HTTP Basic Authentication
//!
//! Parsing of `Authorization: Basic base64(username:password)` headers.

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose};
use std::fmt;

/// Credentials carried by a Basic `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicCredentials {
    /// Parse the header value (`"Basic <base64>"`).
    ///
    /// The decoded text is split at the first `':'`, so passwords may
    /// contain colons and usernames may not.
    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Read credentials from the request's `Authorization` header
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::parse)
    }

    /// Header value for these credentials (used by clients and tests)
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }
}

/// `WWW-Authenticate` challenge value for a realm
pub fn challenge(realm: &str) -> String {
    format!("Basic realm=\"{}\"", realm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_basic_header() {
        // "admin:pw"
        let creds = BasicCredentials::parse("Basic YWRtaW46cHc=").unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert!(BasicCredentials::parse("basic YWRtaW46cHc=").is_some());
        assert!(BasicCredentials::parse("Bearer YWRtaW46cHc=").is_none());
    }

    #[test]
    fn test_password_may_contain_colon() {
        let creds = BasicCredentials {
            username: "user".to_string(),
            password: "a:b:c".to_string(),
        };
        let parsed = BasicCredentials::parse(&creds.to_header_value()).unwrap();
        assert_eq!(parsed, creds);
    }

    #[test]
    fn test_malformed_values() {
        assert!(BasicCredentials::parse("").is_none());
        assert!(BasicCredentials::parse("Basic").is_none());
        assert!(BasicCredentials::parse("Basic !!!notbase64").is_none());
        // "nocolon"
        assert!(BasicCredentials::parse("Basic bm9jb2xvbg==").is_none());
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(BasicCredentials::from_headers(&headers).is_none());

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        let creds = BasicCredentials::from_headers(&headers).unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = BasicCredentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_challenge() {
        assert_eq!(challenge("products"), "Basic realm=\"products\"");
    }
}
