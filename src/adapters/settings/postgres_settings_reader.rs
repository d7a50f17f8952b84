//! PostgreSQL implementation of SettingsReader.
//!
//! Reads from the application's `settings` table (`key TEXT PRIMARY KEY,
//! value TEXT`).

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SettingsReader;

/// PostgreSQL implementation of the SettingsReader port.
pub struct PostgresSettingsReader {
    pool: PgPool,
}

impl PostgresSettingsReader {
    /// Creates a new PostgresSettingsReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsReader for PostgresSettingsReader {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let value: Option<Option<String>> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to read setting: {}", e),
                    )
                    .with_detail("key", key)
                })?;

        // A NULL value reads the same as a missing row.
        Ok(value.flatten())
    }
}
