//! Bearer token issuing.
//!
//! Tokens are HS256 JWTs carrying the user id. No endpoint in this service
//! verifies them; [`JwtIssuer::verify_token`] exists for downstream consumers
//! and tests.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtConfig, JwtIssuer};
//! use core_config::FromEnv;
//!
//! let issuer = JwtIssuer::new(&JwtConfig::from_env()?);
//! let token = issuer.issue_token(&user_id)?;
//! ```

pub mod config;
pub mod jwt;

pub use config::JwtConfig;
pub use jwt::{JwtClaims, JwtIssuer};
