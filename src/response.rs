//! Redirect-after-post helpers.

use crate::extractors::SessionId;
use crate::notice::{Notice, NoticeStore};
use axum::{
    http::header,
    response::{IntoResponse, Redirect, Response},
};

/// Queue `notice` for the caller's session and answer `303 See Other` to the list page.
/// Sets the session cookie when the caller did not have one yet.
pub fn redirect_with_notice(notices: &NoticeStore, session: SessionId, notice: Notice) -> Response {
    let (id, cookie) = session.get_or_create();
    notices.push(&id, notice);
    let mut res = Redirect::to("/").into_response();
    if let Some(cookie) = cookie {
        res.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    res
}
