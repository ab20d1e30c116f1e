// HTTP request handlers
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::auth::check_basic_auth;
use crate::connector::ConnectionOutcome;
use crate::errors::ConnectError;
use crate::models::ConnectionRequest;
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Connect endpoint - checks credentials, parses the payload and connects the users
pub async fn connect_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match handle_connect(&state, &headers, &body).await {
        Ok(outcome) => {
            info!(status = %outcome.status_code(), "{}", outcome.message());
            outcome.into_response()
        }
        Err(e) => {
            warn!(status = %e.status_code(), error = %e, "Connect request rejected");
            e.into_response()
        }
    }
}

async fn handle_connect(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<ConnectionOutcome, ConnectError> {
    check_basic_auth(state.basic_auth.as_deref(), headers)?;
    let request = ConnectionRequest::from_body(body)?;
    state.connector.connect(&request).await
}
