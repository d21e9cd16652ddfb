//! # Axum Helpers
//!
//! Utilities shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: bearer token issuing (JWT)
//! - **[`server`]**: router setup, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: the `{ message, error }` error envelope
//! - **[`extractors`]**: JSON extractor using the error envelope

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{JwtClaims, JwtConfig, JwtIssuer};

// Re-export server types
pub use server::{
    HealthResponse, create_production_app, create_router, health_router,
    shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_permissive_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorContext, ErrorResponse};

// Re-export extractors
pub use extractors::JsonBody;
