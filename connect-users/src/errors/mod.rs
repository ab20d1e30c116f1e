//! Error types for the connect-users service.
//!
//! Request-time failures are expressed as [`ConnectError`] and rendered into a
//! plain-text HTTP response. Graph client failures ([`GraphError`]) never reach
//! the caller directly, and [`ConfigError`] only occurs at startup.

mod config_error;
mod connect_error;
mod graph_error;

pub use config_error::ConfigError;
pub use connect_error::ConnectError;
pub use graph_error::GraphError;
