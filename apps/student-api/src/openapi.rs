//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Documentation of everything under `/api`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student API",
        version = "0.1.0",
        description = "Accounts, feedback and address capture backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_feedback::ApiDoc),
        (path = "/api", api = domain_addresses::ApiDoc)
    ),
    tags(
        (name = "Feedback", description = "Free-form feedback (MongoDB)"),
        (name = "Addresses", description = "Address capture (MongoDB)")
    )
)]
struct ResourceDoc;

/// Combined OpenAPI documentation for all APIs.
///
/// The account routes live at the root, so they are merged rather than
/// nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ResourceDoc::openapi();
        doc.merge(domain_users::ApiDoc::openapi());
        doc
    }
}
