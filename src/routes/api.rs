//! JSON greeting API and its OpenAPI document.

use crate::handlers::greeting::{greeting, openapi};
use axum::{routing::get, Router};

pub fn api_routes() -> Router {
    Router::new()
        .route("/greeting", get(greeting))
        .route("/openapi.json", get(openapi))
}
