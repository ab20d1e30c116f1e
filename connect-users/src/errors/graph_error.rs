//! Graph client error type.

use std::time::Duration;

use thiserror::Error;

/// Failures reported by a [`GraphClient`](crate::graph::GraphClient).
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// Could not build the driver configuration or open a connection.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The statement was rejected or failed while streaming results.
    #[error("Query error: {0}")]
    QueryError(String),

    /// A returned row did not have the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The round trip did not finish in time.
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

impl GraphError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }
}

impl From<neo4rs::Error> for GraphError {
    fn from(err: neo4rs::Error) -> Self {
        Self::QueryError(err.to_string())
    }
}
