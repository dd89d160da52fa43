//! Contact pages: list, create, edit, delete.

use crate::error::AppError;
use crate::extractors::SessionId;
use crate::model::ContactForm;
use crate::notice::Notice;
use crate::render::FormMode;
use crate::response::redirect_with_notice;
use crate::service::ContactValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use std::collections::HashMap;

/// Ids are integers; any other segment names no contact.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(format!("contact '{}'", id_str)))
}

fn pending_notice(state: &AppState, session: &SessionId) -> Option<Notice> {
    session.0.as_deref().and_then(|id| state.notices.take(id))
}

/// GET / — every contact in insertion order.
pub async fn list(State(state): State<AppState>, session: SessionId) -> Result<Html<String>, AppError> {
    let contacts = state.contacts.list().await?;
    state.pages.index(&contacts, pending_notice(&state, &session))
}

/// GET /create — blank form.
pub async fn create_form(State(state): State<AppState>, session: SessionId) -> Result<Html<String>, AppError> {
    state
        .pages
        .form(FormMode::Create, &ContactForm::default(), pending_notice(&state, &session))
}

/// POST /create — validate, insert, redirect; or re-render with the submitted values.
pub async fn create(
    State(state): State<AppState>,
    session: SessionId,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let form = ContactForm::from_fields(fields)?;
    if let Err(rejection) = ContactValidator::validate(&form) {
        tracing::info!(%rejection, "create rejected");
        let page = state
            .pages
            .form(FormMode::Create, &form, Some(Notice::error(rejection.to_string())))?;
        return Ok(page.into_response());
    }
    let id = state.contacts.insert(&form).await?;
    tracing::info!(id, "contact created");
    Ok(redirect_with_notice(&state.notices, session, Notice::success("Contact created.")))
}

/// GET /edit/:id — form prefilled from the stored row.
pub async fn edit_form(
    State(state): State<AppState>,
    session: SessionId,
    Path(id_str): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id_str)?;
    let contact = state
        .contacts
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("contact {}", id)))?;
    state
        .pages
        .form(FormMode::Edit(id), &ContactForm::from(contact), pending_notice(&state, &session))
}

/// POST /edit/:id — validate, replace all fields, redirect; rejected input is shown back as submitted.
pub async fn edit(
    State(state): State<AppState>,
    session: SessionId,
    Path(id_str): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    if state.contacts.find(id).await?.is_none() {
        return Err(AppError::NotFound(format!("contact {}", id)));
    }
    let form = ContactForm::from_fields(fields)?;
    if let Err(rejection) = ContactValidator::validate(&form) {
        tracing::info!(id, %rejection, "edit rejected");
        let page = state
            .pages
            .form(FormMode::Edit(id), &form, Some(Notice::error(rejection.to_string())))?;
        return Ok(page.into_response());
    }
    if state.contacts.update(id, &form).await? == 0 {
        // removed between lookup and update
        return Err(AppError::NotFound(format!("contact {}", id)));
    }
    tracing::info!(id, "contact updated");
    Ok(redirect_with_notice(&state.notices, session, Notice::success("Contact updated.")))
}

/// POST /delete/:id — unconditional; unknown ids still redirect.
pub async fn delete(
    State(state): State<AppState>,
    session: SessionId,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let removed = state.contacts.delete(id).await?;
    tracing::info!(id, removed, "contact deleted");
    Ok(redirect_with_notice(&state.notices, session, Notice::success("Contact deleted.")))
}
