//! HTTP handlers for contact pages and the greeting API.

pub mod contact;
pub mod greeting;
