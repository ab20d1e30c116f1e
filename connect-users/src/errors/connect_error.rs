//! Request-level error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that short-circuit a connection request.
///
/// The `Display` output of each variant is exactly the body returned to the
/// client, so it must never carry internal details such as driver messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// Basic Auth is enabled but the request has no `Authorization` header.
    #[error("Missing authorization credentials")]
    MissingCredentials,

    /// The `Authorization` header could not be decoded or did not match.
    #[error("Unauthorized")]
    Unauthorized,

    /// The request body could not be turned into a `ConnectionRequest`.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The graph client failed. The detail is logged, not returned.
    #[error("Internal server error")]
    Internal(String),
}

impl ConnectError {
    /// Create an invalid payload error.
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ConnectError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_response_bodies() {
        assert_eq!(
            ConnectError::MissingCredentials.to_string(),
            "Missing authorization credentials"
        );
        assert_eq!(ConnectError::Unauthorized.to_string(), "Unauthorized");
        assert_eq!(
            ConnectError::invalid_payload("missing field `user2`").to_string(),
            "Invalid payload: missing field `user2`"
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ConnectError::internal("connection refused (os error 111)");
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ConnectError::MissingCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ConnectError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ConnectError::invalid_payload("x").status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
