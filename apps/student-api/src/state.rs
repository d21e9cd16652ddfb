//! Application state management.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the client shares one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, shut down explicitly on exit
    pub mongo_client: Client,
    /// The database holding `users`, `feedback` and `addresses`
    pub db: Database,
}
