//! Typed errors and HTTP mapping. Internal failures are logged, never shown.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("render: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

const NOT_FOUND_PAGE: &str = "<h1>Resource not found.</h1>";
const BAD_REQUEST_PAGE: &str = "<h1>Bad request.</h1>";
const INTERNAL_ERROR_PAGE: &str = "<h1>An internal error occurred. Please try again later.</h1>";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, page) = match &self {
            AppError::NotFound(what) => {
                tracing::debug!(%what, "not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_PAGE)
            }
            AppError::BadRequest(reason) => {
                tracing::debug!(%reason, "bad request");
                (StatusCode::BAD_REQUEST, BAD_REQUEST_PAGE)
            }
            AppError::Render(e) => {
                tracing::error!(error = %e, "template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_PAGE)
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_PAGE)
            }
        };
        (status, Html(page)).into_response()
    }
}
