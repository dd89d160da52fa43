//! SQLite file location and `contacts` table DDL.

use crate::error::AppError;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use std::path::Path;

/// Tag values mirrored in the advisory CHECK constraint; the empty string means untagged.
const CONTACTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    tag TEXT NOT NULL DEFAULT '' CHECK (tag IN ('family', 'work', 'friends', 'other', '')),
    notes TEXT NOT NULL DEFAULT ''
)
"#;

/// Connection options for the single database file. Creates the file on first connect.
pub fn connect_options(path: impl AsRef<Path>) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
}

/// Open a fresh connection. Callers close it when their one statement is done.
pub async fn open(options: &SqliteConnectOptions) -> Result<SqliteConnection, AppError> {
    Ok(options.connect().await?)
}

/// Create the `contacts` table if it does not exist.
pub async fn ensure_schema(options: &SqliteConnectOptions) -> Result<(), AppError> {
    let mut conn = open(options).await?;
    sqlx::query(CONTACTS_DDL).execute(&mut conn).await?;
    conn.close().await?;
    Ok(())
}

/// Open and close a connection; used by readiness checks.
pub async fn ping(options: &SqliteConnectOptions) -> Result<(), AppError> {
    let mut conn = open(options).await?;
    conn.ping().await?;
    conn.close().await?;
    Ok(())
}
