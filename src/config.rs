//! Server settings from the environment. Call `dotenvy::dotenv()` first to honour `.env`.

use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "CONTACT_BOOK_DB";
pub const ADDR_VAR: &str = "CONTACT_BOOK_ADDR";
pub const BODY_LIMIT_VAR: &str = "CONTACT_BOOK_BODY_LIMIT";

const DEFAULT_DB_PATH: &str = "contacts.db";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database file; created on first use.
    pub database_path: PathBuf,
    pub bind_addr: String,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            bind_addr: DEFAULT_ADDR.to_string(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let database_path = lookup(DB_PATH_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);
        let bind_addr = lookup(ADDR_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.bind_addr);
        let body_limit = match lookup(BODY_LIMIT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid {}, using default", BODY_LIMIT_VAR);
                defaults.body_limit
            }),
            None => defaults.body_limit,
        };
        Self {
            database_path,
            bind_addr,
            body_limit,
        }
    }
}
