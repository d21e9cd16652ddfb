//! API routes module
//!
//! Wires the domain routers to the MongoDB repositories.

pub mod addresses;
pub mod auth;
pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all application routes.
///
/// Resource endpoints live under `/api`; the account endpoints sit at the
/// root.
pub fn routes(state: &AppState) -> Router {
    let api = Router::new()
        .merge(feedback::router(state))
        .merge(addresses::router(state))
        .merge(health::router(state.clone()));

    Router::new()
        .nest("/api", api)
        .merge(auth::router(state))
}
