// Optional HTTP Basic Authentication gate
use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::{engine::general_purpose, Engine as _};
use tracing::warn;

use crate::config::BasicAuthConfig;
use crate::errors::ConnectError;

/// Check the request's `Authorization` header against the expected credentials.
///
/// When `expected` is `None` the gate is disabled and every request passes.
pub fn check_basic_auth(
    expected: Option<&BasicAuthConfig>,
    headers: &HeaderMap,
) -> Result<(), ConnectError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let header = headers
        .get(AUTHORIZATION)
        .ok_or(ConnectError::MissingCredentials)?;

    let Some((username, password)) = header.to_str().ok().and_then(decode_basic) else {
        warn!("Rejected malformed Basic Auth header");
        return Err(ConnectError::Unauthorized);
    };

    if username != expected.username || password != expected.password {
        warn!(username = %username, "Rejected Basic Auth credentials");
        return Err(ConnectError::Unauthorized);
    }

    Ok(())
}

/// Decode a `Basic <base64(username:password)>` header value (RFC 7617).
///
/// The password may contain colons; the username may not.
pub fn decode_basic(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let bytes = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn expected() -> BasicAuthConfig {
        BasicAuthConfig {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        }
    }

    fn headers_with(credentials: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let value = format!("Basic {}", general_purpose::STANDARD.encode(credentials));
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&value).unwrap());
        headers
    }

    #[test]
    fn test_disabled_gate_allows_missing_header() {
        assert_eq!(check_basic_auth(None, &HeaderMap::new()), Ok(()));
    }

    #[test]
    fn test_missing_header_when_enabled() {
        let auth = expected();
        assert_eq!(
            check_basic_auth(Some(&auth), &HeaderMap::new()),
            Err(ConnectError::MissingCredentials)
        );
    }

    #[test]
    fn test_correct_credentials_pass() {
        let auth = expected();
        assert_eq!(
            check_basic_auth(Some(&auth), &headers_with("admin:s3cret")),
            Ok(())
        );
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        let auth = expected();
        assert_eq!(
            check_basic_auth(Some(&auth), &headers_with("admin:wrong")),
            Err(ConnectError::Unauthorized)
        );
        assert_eq!(
            check_basic_auth(Some(&auth), &headers_with("root:s3cret")),
            Err(ConnectError::Unauthorized)
        );
    }

    #[test]
    fn test_malformed_header_rejected() {
        let auth = expected();
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(
            check_basic_auth(Some(&auth), &headers),
            Err(ConnectError::Unauthorized)
        );

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic !!!not-base64"));
        assert_eq!(
            check_basic_auth(Some(&auth), &headers),
            Err(ConnectError::Unauthorized)
        );
    }

    #[test]
    fn test_decode_basic() {
        // "user:pa:ss"
        assert_eq!(
            decode_basic("Basic dXNlcjpwYTpzcw=="),
            Some(("user".to_string(), "pa:ss".to_string()))
        );
        assert_eq!(
            decode_basic("basic dXNlcjpwYTpzcw=="),
            Some(("user".to_string(), "pa:ss".to_string()))
        );
        // "nocolon"
        assert_eq!(decode_basic("Basic bm9jb2xvbg=="), None);
        assert_eq!(decode_basic("dXNlcjpwYXNz"), None);
    }
}
