//! Greeting API endpoint and its generated OpenAPI document.

use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct Greeting {
    /// Fixed greeting text.
    pub message: String,
}

/// Test endpoint for the JSON API.
#[utoipa::path(
    get,
    path = "/api/greeting",
    responses((status = 200, description = "Greeting message", body = Greeting))
)]
pub async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello from the contact book API".into(),
    })
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Contact book API", description = "Example JSON endpoint with generated docs"),
    paths(greeting),
    components(schemas(Greeting))
)]
pub struct ApiDoc;

/// GET /api/openapi.json
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
