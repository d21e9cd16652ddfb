//! MongoDB connector and utilities
//!
//! Provides connection lifecycle (connect, health, shutdown) and
//! MongoDB-specific error helpers.

mod config;
mod connector;
mod errors;
mod health;

pub use config::{DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{MongoError, connect_from_config, shutdown};
pub use errors::{DUPLICATE_KEY_CODE, is_duplicate_key_error};
pub use health::{HealthStatus, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
