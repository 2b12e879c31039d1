//! Application state management.

use database::sql::DatabaseConnection;

/// Shared application state.
///
/// Cloned into routers and handlers; the connection is a pool handle, so
/// clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// SQL connection pool, created once at startup
    pub db: DatabaseConnection,
}
