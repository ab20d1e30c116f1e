// Configuration constants and environment helpers
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::errors::ConfigError;

// Neo4j defaults
pub const DEFAULT_NEO4J_USER: &str = "neo4j";
pub const DEFAULT_NEO4J_DATABASE: &str = "neo4j";
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

// Server defaults
pub const DEFAULT_SERVER_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Connection settings for the graph database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub query_timeout: Duration,
}

/// Expected credentials for the optional Basic Auth gate.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Everything the service reads from its environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub neo4j: Neo4jConfig,
    /// `None` when Basic Auth is disabled.
    pub basic_auth: Option<BasicAuthConfig>,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `NEO4J_URI`: graph database endpoint (required)
    /// - `NEO4J_USER`: database user (default: neo4j)
    /// - `NEO4J_PASSWORD`: database password (default: empty)
    /// - `NEO4J_DATABASE`: database name (default: neo4j)
    /// - `NEO4J_QUERY_TIMEOUT_SECS`: per-query timeout (default: 30)
    /// - `BASIC_AUTH_USER` / `BASIC_AUTH_PASSWORD`: enable Basic Auth when both are non-empty
    /// - `HOST`: bind address (default: 0.0.0.0)
    /// - `PORT`: bind port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let uri = lookup("NEO4J_URI")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("NEO4J_URI"))?;

        let query_timeout_secs = match lookup("NEO4J_QUERY_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid("NEO4J_QUERY_TIMEOUT_SECS", raw))?,
            None => DEFAULT_QUERY_TIMEOUT_SECS,
        };

        let neo4j = Neo4jConfig {
            uri,
            user: lookup("NEO4J_USER").unwrap_or_else(|| DEFAULT_NEO4J_USER.to_string()),
            password: lookup("NEO4J_PASSWORD").unwrap_or_default(),
            database: lookup("NEO4J_DATABASE")
                .unwrap_or_else(|| DEFAULT_NEO4J_DATABASE.to_string()),
            query_timeout: Duration::from_secs(query_timeout_secs),
        };

        // Empty values count as unset, so a blank variable never enables the gate.
        let basic_auth = match (
            lookup("BASIC_AUTH_USER").filter(|v| !v.is_empty()),
            lookup("BASIC_AUTH_PASSWORD").filter(|v| !v.is_empty()),
        ) {
            (Some(username), Some(password)) => Some(BasicAuthConfig { username, password }),
            _ => None,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::invalid("HOST", raw))?,
            None => DEFAULT_SERVER_HOST,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("PORT", raw))?,
            None => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            neo4j,
            basic_auth,
            server: ServerConfig { host, port },
        })
    }
}
