//! SQLite implementation of the `CauseRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use causeway_core::cause::{Cause, MSG_TITLE_EXISTS, NewCause};
use causeway_core::clock::Clock;
use causeway_core::error::{DomainError, FieldErrors};
use causeway_core::repository::CauseRepository;

use crate::row::CauseRow;

/// SQLite-backed cause repository.
#[derive(Clone)]
pub struct SqliteCauseRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteCauseRepository {
    /// Creates a new `SqliteCauseRepository`.
    #[must_use]
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

/// Maps a write error, turning a violated `causes.title` unique index into a
/// field-level validation error.
fn map_write_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db)
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            DomainError::Validation(FieldErrors::single("title", MSG_TITLE_EXISTS))
        }
        _ => DomainError::Infrastructure(err.to_string()),
    }
}

fn map_read_error(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl CauseRepository for SqliteCauseRepository {
    async fn create(&self, draft: NewCause) -> Result<Cause, DomainError> {
        let id = Uuid::new_v4();
        let now = self.clock.now();

        sqlx::query(
            "INSERT INTO causes (id, title, description, image_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        tracing::debug!(cause_id = %id, "cause created");

        Ok(Cause {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list(&self) -> Result<Vec<Cause>, DomainError> {
        let rows: Vec<CauseRow> = sqlx::query_as(
            "SELECT id, title, description, image_url, created_at, updated_at
             FROM causes
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(Cause::try_from).collect()
    }

    async fn find(&self, id: Uuid) -> Result<Option<Cause>, DomainError> {
        let row: Option<CauseRow> = sqlx::query_as(
            "SELECT id, title, description, image_url, created_at, updated_at
             FROM causes
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(Cause::try_from).transpose()
    }

    async fn update(&self, id: Uuid, draft: NewCause) -> Result<Option<Cause>, DomainError> {
        // updated_at is deliberately left at its creation value.
        let result = sqlx::query(
            "UPDATE causes SET title = ?, description = ?, image_url = ? WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        tracing::debug!(cause_id = %id, "cause updated");
        self.find(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM causes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(cause_id = %id, "cause deleted");
        }
        Ok(deleted)
    }
}
