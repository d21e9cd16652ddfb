use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{FeedbackError, FeedbackResult};

pub const FEEDBACK_MISSING: &str = "Feedback data is missing";
pub const FEEDBACK_NOT_OBJECT: &str = "Feedback must be a JSON object";

/// A submitted feedback document.
///
/// Fields are whatever the caller sent; only `_id` is owned by the server.
/// Serializes as the flat object clients see: `{ "_id": "<hex>", ...fields }`.
///
/// New documents always get an ObjectId, but the collection may also hold
/// documents written by other clients with an `_id` of any type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    #[serde(rename = "_id", serialize_with = "serialize_id")]
    pub id: Bson,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Feedback {
    /// Build a new document from a request body.
    ///
    /// `null`, `{}` and non-object values are rejected. A caller supplied
    /// `_id` is dropped.
    pub fn from_submission(body: Value) -> FeedbackResult<Self> {
        let mut fields = match body {
            Value::Null => return Err(FeedbackError::Validation(FEEDBACK_MISSING.to_string())),
            Value::Object(fields) => fields,
            _ => return Err(FeedbackError::Validation(FEEDBACK_NOT_OBJECT.to_string())),
        };

        fields.remove("_id");
        if fields.is_empty() {
            return Err(FeedbackError::Validation(FEEDBACK_MISSING.to_string()));
        }

        Ok(Self {
            id: Bson::ObjectId(ObjectId::new()),
            fields,
        })
    }
}

/// ObjectIds render as hex strings, anything else as relaxed extended JSON.
fn serialize_id<S: Serializer>(id: &Bson, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Bson::ObjectId(oid) => serializer.serialize_str(&oid.to_hex()),
        other => other.clone().into_relaxed_extjson().serialize(serializer),
    }
}

/// Response of `POST /api/feedback`.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeedbackCreated {
    #[schema(example = "Feedback submitted successfully")]
    pub message: String,
    /// The stored document, including its generated `_id`
    #[schema(value_type = Object)]
    pub feedback: Feedback,
}
