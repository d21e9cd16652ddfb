//! Feedback API routes

use axum::Router;
use domain_feedback::{FeedbackService, MongoFeedbackRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoFeedbackRepository::new(state.db.clone());
    handlers::router(FeedbackService::new(repository))
}
