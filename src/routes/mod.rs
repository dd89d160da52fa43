//! Router assembly.

mod api;
mod common;
mod contact;

pub use api::api_routes;
pub use common::common_routes;
pub use contact::contact_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: contact pages at `/`, common routes, JSON API under `/api`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(contact_routes(state.clone()))
        .merge(common_routes(state))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
