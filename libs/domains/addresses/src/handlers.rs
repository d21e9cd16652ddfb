use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    AppError, ErrorContext, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{AddressDetails, AddressSaved};
use crate::repository::AddressRepository;
use crate::service::AddressService;

/// OpenAPI documentation for the address endpoint
#[derive(OpenApi)]
#[openapi(
    paths(save_address),
    components(
        schemas(AddressDetails, AddressSaved),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Addresses", description = "Address capture (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the addresses router: `POST /address`.
pub fn router<R: AddressRepository + 'static>(service: AddressService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/address", post(save_address::<R>))
        .with_state(shared_service)
}

/// Save an address
#[utoipa::path(
    post,
    path = "/address",
    tag = "Addresses",
    request_body = AddressDetails,
    responses(
        (status = 200, description = "Address stored", body = AddressSaved),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save_address<R: AddressRepository>(
    State(service): State<Arc<AddressService<R>>>,
    JsonBody(details): JsonBody<AddressDetails>,
) -> Result<Json<AddressSaved>, AppError> {
    let address = service
        .save_address(details)
        .await
        .on_failure("Error saving address")?;

    Ok(Json(AddressSaved {
        message: "Address saved successfully".to_string(),
        address: address.into(),
    }))
}
