//! Feedback Domain
//!
//! Schema-less feedback documents: submit and list.
//!
//! ```rust,no_run
//! use domain_feedback::{handlers, repository::InMemoryFeedbackRepository, service::FeedbackService};
//!
//! let router = handlers::router(FeedbackService::new(InMemoryFeedbackRepository::new()));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use self::mongodb::MongoFeedbackRepository;
pub use error::{FeedbackError, FeedbackResult};
pub use handlers::ApiDoc;
pub use models::{Feedback, FeedbackCreated};
pub use repository::{FeedbackRepository, InMemoryFeedbackRepository};
pub use service::FeedbackService;
