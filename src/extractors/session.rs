//! Extract the session id used to key single-use notices.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
};

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "contact_book_session";

/// Extractor for the optional session id from the session cookie.
#[derive(Clone, Debug)]
pub struct SessionId(pub Option<String>);

impl SessionId {
    /// Existing id, or a freshly minted one plus the `Set-Cookie` value announcing it.
    pub fn get_or_create(self) -> (String, Option<HeaderValue>) {
        match self.0 {
            Some(id) => (id, None),
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
                // uuid text and the fixed attributes are always valid header bytes
                let value = HeaderValue::from_str(&cookie).ok();
                (id, value)
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|s| s.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, v)| v.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(SessionId(value))
    }
}
