use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::app_error::AppError;

pub mod waitlist;

// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    /// Opens a small pool against the hosted store. The waitlist insert is the
    /// only consumer, so a handful of connections is plenty.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| anyhow::anyhow!("could not reach the waitlist database: {e}"))?;

        info!("Waitlist database pool ready");
        Ok(PostgresPersistence { pool })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                // The store's duplicate-key code is the authoritative conflict
                // signal; there is no pre-insert existence check to race with.
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    AppError::DuplicateEmail
                } else {
                    // Log the actual error for operators, but don't expose details
                    tracing::error!(error = ?err, "Database error");
                    AppError::Database("Database operation failed".into())
                }
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
