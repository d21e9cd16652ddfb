use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_helpers::{
    AppError, ErrorContext,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::FeedbackError;
use crate::models::{FEEDBACK_MISSING, Feedback, FeedbackCreated};
use crate::repository::FeedbackRepository;
use crate::service::FeedbackService;

/// OpenAPI documentation for the feedback endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_feedback, submit_feedback),
    components(
        schemas(FeedbackCreated),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Feedback", description = "Free-form feedback (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the feedback router: `GET /feedbacks`, `POST /feedback`.
pub fn router<R: FeedbackRepository + 'static>(service: FeedbackService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/feedbacks", get(list_feedback::<R>))
        .route("/feedback", post(submit_feedback::<R>))
        .with_state(shared_service)
}

/// List all feedback
#[utoipa::path(
    get,
    path = "/feedbacks",
    tag = "Feedback",
    responses(
        (status = 200, description = "Every stored feedback document", body = Vec<serde_json::Value>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_feedback<R: FeedbackRepository>(
    State(service): State<Arc<FeedbackService<R>>>,
) -> Result<Json<Vec<Feedback>>, AppError> {
    let feedback = service
        .list_feedback()
        .await
        .on_failure("Error fetching feedbacks")?;
    Ok(Json(feedback))
}

/// Submit feedback
///
/// Any non-empty JSON object is accepted and stored unchanged.
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "Feedback",
    request_body(content = serde_json::Value, description = "Arbitrary feedback fields"),
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackCreated),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn submit_feedback<R: FeedbackRepository>(
    State(service): State<Arc<FeedbackService<R>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<FeedbackCreated>), AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FeedbackError::Validation(FEEDBACK_MISSING.to_string()).into());
    }
    let body: Value = serde_json::from_slice(&body)?;

    let feedback = service
        .submit_feedback(body)
        .await
        .on_failure("Error submitting feedback")?;

    Ok((
        StatusCode::CREATED,
        Json(FeedbackCreated {
            message: "Feedback submitted successfully".to_string(),
            feedback,
        }),
    ))
}
