//! Row types decoded from SQLite and their conversions into domain records.

use causeway_core::cause::Cause;
use causeway_core::donation::{Amount, Donation};
use causeway_core::error::DomainError;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `causes` table. Ids are stored as canonical UUID strings.
#[derive(Debug, FromRow)]
pub(crate) struct CauseRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CauseRow> for Cause {
    type Error = DomainError;

    fn try_from(row: CauseRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&row.id)?,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A row of the `donations` table. Amounts are stored as integer cents.
#[derive(Debug, FromRow)]
pub(crate) struct DonationRow {
    pub id: String,
    pub cause_id: String,
    pub name: String,
    pub email: String,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DonationRow> for Donation {
    type Error = DomainError;

    fn try_from(row: DonationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&row.id)?,
            cause_id: parse_id(&row.cause_id)?,
            name: row.name,
            email: row.email,
            amount: Amount::from_cents(row.amount_cents),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw)
        .map_err(|e| DomainError::Infrastructure(format!("corrupt id column {raw:?}: {e}")))
}
