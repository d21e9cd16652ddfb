//! MongoDB implementation of FeedbackRepository
//!
//! Feedback has no fixed schema, so the collection is accessed as raw
//! `Document`s and converted at the edge.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
};
use serde_json::Value;
use tracing::instrument;

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::Feedback;
use crate::repository::FeedbackRepository;

pub const COLLECTION: &str = "feedback";

/// MongoDB implementation of the FeedbackRepository
pub struct MongoFeedbackRepository {
    collection: Collection<Document>,
}

impl MongoFeedbackRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Document>(COLLECTION),
        }
    }
}

fn to_document(feedback: &Feedback) -> FeedbackResult<Document> {
    let fields = mongodb::bson::to_document(&feedback.fields)
        .map_err(|e| FeedbackError::Database(e.to_string()))?;

    let mut document = doc! { "_id": feedback.id.clone() };
    document.extend(fields);
    Ok(document)
}

fn from_document(mut document: Document) -> FeedbackResult<Feedback> {
    let Some(id) = document.remove("_id") else {
        return Err(FeedbackError::Database("feedback document has no _id".to_string()));
    };

    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(Feedback { id, fields }),
        other => Err(FeedbackError::Database(format!(
            "feedback document is not an object: {other}"
        ))),
    }
}

#[async_trait]
impl FeedbackRepository for MongoFeedbackRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> FeedbackResult<Vec<Feedback>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents.into_iter().map(from_document).collect()
    }

    #[instrument(skip(self, feedback), fields(feedback_id = %feedback.id))]
    async fn insert(&self, feedback: Feedback) -> FeedbackResult<Feedback> {
        self.collection.insert_one(to_document(&feedback)?).await?;

        tracing::info!("Feedback stored successfully");
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_conversion_keeps_fields_and_id() {
        let feedback =
            Feedback::from_submission(json!({ "comment": "great", "score": 4, "meta": { "page": "home" } }))
                .unwrap();

        let document = to_document(&feedback).unwrap();
        assert_eq!(document.get("_id"), Some(&feedback.id));
        assert!(document.get_object_id("_id").is_ok());
        assert_eq!(document.get_str("comment").unwrap(), "great");

        let restored = from_document(document).unwrap();
        assert_eq!(restored, feedback);
    }

    #[test]
    fn test_document_with_string_id_is_listed() {
        let feedback = from_document(doc! { "_id": "plain", "comment": "x" }).unwrap();

        assert_eq!(feedback.id, Bson::String("plain".to_string()));
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json, json!({ "_id": "plain", "comment": "x" }));
    }

    #[test]
    fn test_document_without_id_is_an_error() {
        let result = from_document(doc! { "comment": "x" });
        assert!(matches!(result, Err(FeedbackError::Database(_))));
    }
}
