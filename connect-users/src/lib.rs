//! # connect-users
//!
//! HTTP endpoint that records a `CONNECTED_TO` relationship between two
//! existing `User` nodes in Neo4j.
//!
//! A request flows through:
//!
//! 1. [`auth`]: optional Basic Auth gate
//! 2. [`models`]: JSON payload parsing into a [`ConnectionRequest`]
//! 3. [`connector`]: the idempotent `MERGE` and outcome mapping
//! 4. [`graph`]: the Neo4j round trip

pub mod auth;
pub mod config;
pub mod connector;
pub mod errors;
pub mod graph;
pub mod models;
pub mod server;

pub use config::AppConfig;
pub use connector::{ConnectionOutcome, UserConnector};
pub use errors::{ConfigError, ConnectError, GraphError};
pub use graph::{GraphClient, Neo4jClient};
pub use models::ConnectionRequest;
