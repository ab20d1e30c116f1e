//! Connection handler: merges a `CONNECTED_TO` relationship between two users
//! and maps the database outcome to an HTTP status and message.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::errors::ConnectError;
use crate::graph::{CypherStatement, GraphClient};
use crate::models::ConnectionRequest;

const CONNECT_USERS_QUERY: &str = "\
MATCH (u:User {email: $email1}), (u2:User {email: $email2})
MERGE (u)-[r:CONNECTED_TO]->(u2)
RETURN u, u2";

/// Business outcome of a connect call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// The relationship was created by this call.
    Connected,
    /// Both users exist and the relationship was already there.
    AlreadyConnected,
    /// At least one email has no matching `User` node.
    UsersNotFound,
}

impl ConnectionOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Connected | Self::AlreadyConnected => StatusCode::OK,
            Self::UsersNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Connected => "OK",
            Self::AlreadyConnected => "Users already connected",
            Self::UsersNotFound => "One or more of the User emails were not found",
        }
    }
}

impl IntoResponse for ConnectionOutcome {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}

/// Build the statement that connects `user1` to `user2`.
pub fn connect_statement(request: &ConnectionRequest) -> CypherStatement {
    CypherStatement {
        text: CONNECT_USERS_QUERY,
        params: vec![
            ("email1", request.user1.clone()),
            ("email2", request.user2.clone()),
        ],
        keys: ["u", "u2"],
    }
}

pub struct UserConnector {
    client: Arc<dyn GraphClient>,
}

impl UserConnector {
    pub fn new(client: Arc<dyn GraphClient>) -> Self {
        Self { client }
    }

    /// Connect the two users named in `request`.
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionOutcome)` - Created, already present, or users not found
    /// * `Err(ConnectError::Internal)` - If the graph client failed
    pub async fn connect(
        &self,
        request: &ConnectionRequest,
    ) -> Result<ConnectionOutcome, ConnectError> {
        info!(user1 = %request.user1, user2 = %request.user2, "Connection request received");

        let statement = connect_statement(request);
        let outcome = self.client.execute(&statement).await.map_err(|e| {
            error!(error = %e, "Failed to connect users");
            ConnectError::internal(e.to_string())
        })?;

        info!(
            records = outcome.records.len(),
            counters = ?outcome.counters,
            keys = ?outcome.keys,
            "Connect users query finished"
        );

        if outcome.records.is_empty() {
            return Ok(ConnectionOutcome::UsersNotFound);
        }

        if !outcome.counters.contains_updates() {
            return Ok(ConnectionOutcome::AlreadyConnected);
        }

        Ok(ConnectionOutcome::Connected)
    }
}
