//! Contact book: server-rendered CRUD over a single SQLite file.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod notice;
pub mod render;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::AppError;
pub use model::{Contact, ContactForm, Tag};
pub use notice::{Notice, NoticeKind, NoticeStore};
pub use render::Pages;
pub use routes::{api_routes, app, common_routes, contact_routes};
pub use service::{ContactService, ContactValidator, Rejection};
pub use state::AppState;
pub use store::{connect_options, ensure_schema};
