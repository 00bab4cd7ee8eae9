//! SQLite implementation of the `DonationRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use causeway_core::clock::Clock;
use causeway_core::donation::{Donation, NewDonation};
use causeway_core::error::DomainError;
use causeway_core::repository::DonationRepository;

use crate::row::DonationRow;

/// SQLite-backed donation repository.
///
/// `donations.cause_id` carries no foreign key constraint: deleting a cause
/// neither removes its donations nor is blocked by them.
#[derive(Clone)]
pub struct SqliteDonationRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteDonationRepository {
    /// Creates a new `SqliteDonationRepository`.
    #[must_use]
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl DonationRepository for SqliteDonationRepository {
    async fn create(&self, cause_id: Uuid, draft: NewDonation) -> Result<Donation, DomainError> {
        let id = Uuid::new_v4();
        let now = self.clock.now();

        sqlx::query(
            "INSERT INTO donations (id, cause_id, name, email, amount_cents, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(cause_id.to_string())
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(draft.amount.cents())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        tracing::debug!(donation_id = %id, cause_id = %cause_id, "donation recorded");

        Ok(Donation {
            id,
            cause_id,
            name: draft.name,
            email: draft.email,
            amount: draft.amount,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list_for_cause(&self, cause_id: Uuid) -> Result<Vec<Donation>, DomainError> {
        let rows: Vec<DonationRow> = sqlx::query_as(
            "SELECT id, cause_id, name, email, amount_cents, created_at, updated_at
             FROM donations
             WHERE cause_id = ?
             ORDER BY created_at DESC",
        )
        .bind(cause_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Infrastructure(e.to_string()))?;

        rows.into_iter().map(Donation::try_from).collect()
    }
}
