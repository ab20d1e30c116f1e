//! connect-users entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use connect_users::{server, AppConfig, Neo4jClient, UserConnector};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("connect_users=info,tower_http=info"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_tracing();

    info!(
        service_name = "connect-users",
        service_version = env!("CARGO_PKG_VERSION"),
        "Starting connect-users"
    );

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!(
        neo4j_uri = %config.neo4j.uri,
        neo4j_database = %config.neo4j.database,
        basic_auth = config.basic_auth.is_some(),
        "Configuration loaded"
    );

    let client = Neo4jClient::new(config.neo4j.clone());
    let connector = UserConnector::new(Arc::new(client));
    let state = server::AppState::new(connector, config.basic_auth.clone());

    let app = server::create_app(state);
    server::run_server(app, config.server.socket_addr()).await
}
