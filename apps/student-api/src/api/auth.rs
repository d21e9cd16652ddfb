//! Account API routes
//!
//! This module wires up the users domain and the token issuer.

use axum::Router;
use axum_helpers::JwtIssuer;
use domain_users::{MongoUserRepository, UserService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Ensure the unique email index exists. Run once before serving.
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoUserRepository::new(db.clone())
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create users indexes: {}", e))
}

pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(state.db.clone());
    let issuer = JwtIssuer::new(&state.config.jwt);

    handlers::router(UserService::new(repository), issuer)
}
