//! Contact storage: one connection and one parameterized statement per call.

use crate::error::AppError;
use crate::model::{Contact, ContactForm};
use crate::store;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

const SELECT_ALL: &str = "SELECT id, name, email, phone, tag, notes FROM contacts ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email, phone, tag, notes FROM contacts WHERE id = ?";
const INSERT: &str = "INSERT INTO contacts (name, email, phone, tag, notes) VALUES (?, ?, ?, ?, ?)";
const UPDATE: &str = "UPDATE contacts SET name = ?, email = ?, phone = ?, tag = ?, notes = ? WHERE id = ?";
const DELETE: &str = "DELETE FROM contacts WHERE id = ?";

/// Storage accessor for contacts. Holds only the connection options; no pooling.
#[derive(Clone, Debug)]
pub struct ContactService {
    options: SqliteConnectOptions,
}

impl ContactService {
    pub fn new(options: SqliteConnectOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SqliteConnectOptions {
        &self.options
    }

    /// All contacts in insertion order.
    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        tracing::debug!(sql = SELECT_ALL, "query");
        let mut conn = store::open(&self.options).await?;
        let rows = sqlx::query_as::<_, Contact>(SELECT_ALL)
            .fetch_all(&mut conn)
            .await;
        finish(conn, rows).await
    }

    pub async fn find(&self, id: i64) -> Result<Option<Contact>, AppError> {
        tracing::debug!(sql = SELECT_BY_ID, id, "query");
        let mut conn = store::open(&self.options).await?;
        let row = sqlx::query_as::<_, Contact>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        finish(conn, row).await
    }

    /// Insert the normalized form. Returns the id assigned by the store.
    pub async fn insert(&self, form: &ContactForm) -> Result<i64, AppError> {
        let c = form.normalized();
        tracing::debug!(sql = INSERT, "query");
        let mut conn = store::open(&self.options).await?;
        let res = sqlx::query(INSERT)
            .bind(&c.name)
            .bind(&c.email)
            .bind(&c.phone)
            .bind(&c.tag)
            .bind(&c.notes)
            .execute(&mut conn)
            .await
            .map(|r| r.last_insert_rowid());
        finish(conn, res).await
    }

    /// Replace every field but id. Returns rows affected (0 when the id does not exist).
    pub async fn update(&self, id: i64, form: &ContactForm) -> Result<u64, AppError> {
        let c = form.normalized();
        tracing::debug!(sql = UPDATE, id, "query");
        let mut conn = store::open(&self.options).await?;
        let res = sqlx::query(UPDATE)
            .bind(&c.name)
            .bind(&c.email)
            .bind(&c.phone)
            .bind(&c.tag)
            .bind(&c.notes)
            .bind(id)
            .execute(&mut conn)
            .await
            .map(|r| r.rows_affected());
        finish(conn, res).await
    }

    /// Delete by id. Missing ids are a no-op (0 rows affected).
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = DELETE, id, "query");
        let mut conn = store::open(&self.options).await?;
        let res = sqlx::query(DELETE)
            .bind(id)
            .execute(&mut conn)
            .await
            .map(|r| r.rows_affected());
        finish(conn, res).await
    }
}

/// Close the connection whether or not the statement succeeded; the statement error wins.
async fn finish<T>(conn: SqliteConnection, res: Result<T, sqlx::Error>) -> Result<T, AppError> {
    let closed = conn.close().await;
    let value = res?;
    closed?;
    Ok(value)
}
