// Neo4j implementation of the graph client
use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Node, Query, Row};
use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::config::Neo4jConfig;
use crate::errors::GraphError;
use crate::graph::{CypherStatement, GraphClient};
use crate::models::{QueryOutcome, UpdateCounters, UserNode, UserPair};

/// Opens a fresh driver for every statement and drops it before returning,
/// so no connection outlives the call on any path.
pub struct Neo4jClient {
    config: Neo4jConfig,
}

impl Neo4jClient {
    pub fn new(config: Neo4jConfig) -> Self {
        Self { config }
    }

    fn connect(&self) -> Result<Graph, GraphError> {
        let config = ConfigBuilder::default()
            .uri(self.config.uri.as_str())
            .user(self.config.user.as_str())
            .password(self.config.password.as_str())
            .db(self.config.database.as_str())
            .build()
            .map_err(|e| GraphError::connection(e.to_string()))?;

        Graph::connect(config).map_err(|e| GraphError::connection(e.to_string()))
    }

    async fn run_statement(&self, statement: &CypherStatement) -> Result<QueryOutcome, GraphError> {
        let graph = self.connect()?;

        let mut query = Query::new(statement.text.to_string());
        for (name, value) in &statement.params {
            query = query.param(name, value.clone());
        }

        // The statement auto-commits, so by the time rows arrive the write has
        // happened. A row that fails to decode is still counted as a match.
        let mut stream = graph.execute(query).await?;

        let mut records = Vec::new();
        while let Some(row) = stream.next().await? {
            records.push(UserPair {
                user1: user_or_placeholder(decode_user(&row, statement.keys[0])),
                user2: user_or_placeholder(decode_user(&row, statement.keys[1])),
            });
        }

        let summary = stream.finish().await?;
        let counters = counters_from(summary.stats());

        Ok(QueryOutcome {
            records,
            counters,
            keys: statement.keys.iter().map(|k| k.to_string()).collect(),
        })
    }
}

#[async_trait]
impl GraphClient for Neo4jClient {
    async fn execute(&self, statement: &CypherStatement) -> Result<QueryOutcome, GraphError> {
        debug!(database = %self.config.database, "Executing statement");

        let result = match timeout(self.config.query_timeout, self.run_statement(statement)).await {
            Ok(result) => result,
            Err(_) => Err(GraphError::Timeout(self.config.query_timeout)),
        };

        if let Err(e) = &result {
            error!(error = %e, "Graph query failed");
        }
        result
    }
}

fn decode_user(row: &Row, key: &str) -> Result<UserNode, GraphError> {
    let node: Node = row
        .get(key)
        .map_err(|e| GraphError::decode(format!("column `{}`: {}", key, e)))?;
    let email: String = node
        .get("email")
        .map_err(|e| GraphError::decode(format!("column `{}` email: {}", key, e)))?;

    Ok(UserNode { email })
}

/// Keep a matched row even when its node cannot be decoded; the email is left empty.
fn user_or_placeholder(decoded: Result<UserNode, GraphError>) -> UserNode {
    decoded.unwrap_or_else(|e| {
        warn!(error = %e, "Matched User node could not be decoded");
        UserNode {
            email: String::new(),
        }
    })
}

fn counters_from(stats: &neo4rs::summary::Counters) -> UpdateCounters {
    UpdateCounters {
        nodes_created: stats.nodes_created,
        nodes_deleted: stats.nodes_deleted,
        relationships_created: stats.relationships_created,
        relationships_deleted: stats.relationships_deleted,
        properties_set: stats.properties_set,
        labels_added: stats.labels_added,
        labels_removed: stats.labels_removed,
        indexes_added: stats.indexes_added,
        indexes_removed: stats.indexes_removed,
        constraints_added: stats.constraints_added,
        constraints_removed: stats.constraints_removed,
        system_updates: stats.system_updates,
    }
}
