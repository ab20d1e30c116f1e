//! Graph database access.
//!
//! [`GraphClient`] abstracts the backend so the connection logic can be
//! exercised without a live database. [`Neo4jClient`] is the production
//! implementation.

mod neo4j;

use async_trait::async_trait;

use crate::errors::GraphError;
use crate::models::QueryOutcome;

pub use neo4j::Neo4jClient;

/// A parametrized Cypher statement returning two `User` node columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherStatement {
    pub text: &'static str,
    pub params: Vec<(&'static str, String)>,
    /// Result columns, in order: the first and second matched user.
    pub keys: [&'static str; 2],
}

/// Executes a single statement against the graph backend.
///
/// Implementations log their own failures; callers only decide how to
/// report them.
#[async_trait]
pub trait GraphClient: Send + Sync {
    async fn execute(&self, statement: &CypherStatement) -> Result<QueryOutcome, GraphError>;
}
