use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::FeedbackResult;
use crate::models::Feedback;

/// Repository trait for Feedback persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Every stored feedback document, in store order
    async fn list(&self) -> FeedbackResult<Vec<Feedback>>;

    /// Store a new feedback document
    async fn insert(&self, feedback: Feedback) -> FeedbackResult<Feedback>;
}

/// In-memory implementation of FeedbackRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryFeedbackRepository {
    feedback: Arc<RwLock<Vec<Feedback>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn list(&self) -> FeedbackResult<Vec<Feedback>> {
        Ok(self.feedback.read().await.clone())
    }

    async fn insert(&self, feedback: Feedback) -> FeedbackResult<Feedback> {
        self.feedback.write().await.push(feedback.clone());
        tracing::info!(feedback_id = %feedback.id, "Created feedback");
        Ok(feedback)
    }
}
