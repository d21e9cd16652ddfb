use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, Environment};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // Tracing first so configuration fallbacks are logged
    init_tracing(&Environment::from_env());

    let config = Config::from_env()?;

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    // No retry: an unreachable store aborts startup
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    api::auth::init_indexes(&db).await?;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let routes = api::routes(&state).merge(health_router(state.config.app));
    let app = axum_helpers::create_router::<openapi::ApiDoc>(routes);

    info!("Starting Student API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            database::mongodb::shutdown(state.mongo_client).await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Student API shutdown complete");
    Ok(())
}
