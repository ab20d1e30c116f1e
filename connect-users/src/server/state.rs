// App state for Axum server
use std::sync::Arc;

use crate::config::BasicAuthConfig;
use crate::connector::UserConnector;

#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<UserConnector>,
    pub basic_auth: Option<Arc<BasicAuthConfig>>,
}

impl AppState {
    pub fn new(connector: UserConnector, basic_auth: Option<BasicAuthConfig>) -> Self {
        Self {
            connector: Arc::new(connector),
            basic_auth: basic_auth.map(Arc::new),
        }
    }
}
