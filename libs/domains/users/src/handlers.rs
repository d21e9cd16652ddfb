use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{
    AppError, ErrorContext, JsonBody, JwtIssuer,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserError;
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, ResetPasswordRequest,
};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the account endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login, reset_password),
    components(
        schemas(RegisterRequest, LoginRequest, ResetPasswordRequest, LoginResponse, MessageResponse),
        responses(BadRequestResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Auth", description = "Registration, login and password reset")
    )
)]
pub struct ApiDoc;

/// Shared state of the account handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub issuer: JwtIssuer,
}

/// Create the account router: `/register`, `/login`, `/resetpassword`.
///
/// Routes are absolute; merge the router at the application root.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, issuer: JwtIssuer) -> Router {
    let state = Arc::new(AuthState { service, issuer });

    Router::new()
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>))
        .route("/resetpassword", post(reset_password::<R>))
        .with_state(state)
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<Arc<AuthState<R>>>,
    JsonBody(input): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state
        .service
        .register(input)
        .await
        .on_failure("Error registering user")?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<Arc<AuthState<R>>>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state.service.verify_credentials(input).await?;

    let token = state
        .issuer
        .issue_token(&user.id.to_hex())
        .map_err(UserError::from)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// Set a new password for an email
///
/// Succeeds even when no account has this email.
#[utoipa::path(
    post,
    path = "/resetpassword",
    tag = "Auth",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn reset_password<R: UserRepository>(
    State(state): State<Arc<AuthState<R>>>,
    JsonBody(input): JsonBody<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.service.reset_password(input).await?;
    Ok(Json(MessageResponse::new("Password reset successfully")))
}
