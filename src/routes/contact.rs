//! Contact page routes. Delete only answers POST.

use crate::handlers::contact::{create, create_form, delete, edit, edit_form, list};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn contact_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/create", get(create_form).post(create))
        .route("/edit/:id", get(edit_form).post(edit))
        .route("/delete/:id", post(delete))
        .with_state(state)
}
