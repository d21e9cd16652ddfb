//! Feedback Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::error::FeedbackResult;
use crate::models::Feedback;
use crate::repository::FeedbackRepository;

pub struct FeedbackService<R: FeedbackRepository> {
    repository: Arc<R>,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All feedback ever submitted
    #[instrument(skip(self))]
    pub async fn list_feedback(&self) -> FeedbackResult<Vec<Feedback>> {
        self.repository.list().await
    }

    /// Store a feedback body as-is
    #[instrument(skip(self, body))]
    pub async fn submit_feedback(&self, body: Value) -> FeedbackResult<Feedback> {
        let feedback = Feedback::from_submission(body)?;
        self.repository.insert(feedback).await
    }
}
