//! Users Domain
//!
//! Account registration, credential checks and password resets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, token issuing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Presence checks, bcrypt hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / MongoDB)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Stored user, request/response DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtConfig, JwtIssuer};
//! use domain_users::{handlers, repository::InMemoryUserRepository, service::UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let issuer = JwtIssuer::new(&JwtConfig::new("secret"));
//!
//! let router = handlers::router(service, issuer);
//! ```

pub mod credentials;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use credentials::PasswordHasher;
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, AuthState};
pub use models::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, ResetPasswordRequest, User,
};
pub use self::mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
