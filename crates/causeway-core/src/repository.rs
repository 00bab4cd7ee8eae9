//! Repository traits for causes and donations.
//!
//! Lookups return `Option` so the "record does not exist" case is an explicit
//! result rather than an error; the HTTP boundary decides what a missing
//! record means.

use async_trait::async_trait;
use uuid::Uuid;

use crate::cause::{Cause, NewCause};
use crate::donation::{Donation, NewDonation};
use crate::error::DomainError;

/// Durable store of fundraising causes.
#[async_trait]
pub trait CauseRepository: Send + Sync {
    /// Persists a new cause, generating its id and timestamps.
    ///
    /// A title collision is a `DomainError::Validation` with a field-level
    /// error on `title`; nothing is written in that case.
    async fn create(&self, draft: NewCause) -> Result<Cause, DomainError>;

    /// All causes, most recently created first.
    async fn list(&self) -> Result<Vec<Cause>, DomainError>;

    /// The cause with `id`, or `None` when it does not exist.
    async fn find(&self, id: Uuid) -> Result<Option<Cause>, DomainError>;

    /// Replaces `title`, `description`, and `image_url` of the cause with
    /// `id`. Returns the updated record, or `None` when the id does not
    /// exist. `updated_at` is not refreshed.
    ///
    /// Moving to a title held by a different cause is a title collision;
    /// keeping the same title is not.
    async fn update(&self, id: Uuid, draft: NewCause) -> Result<Option<Cause>, DomainError>;

    /// Deletes the cause with `id`. Returns whether a record was removed.
    /// Donations referencing the cause are left in place.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

/// Durable store of donations.
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Persists a new donation against `cause_id`, generating its id and
    /// timestamps. The caller resolves the cause first; this is a single
    /// insert with no further checks.
    async fn create(&self, cause_id: Uuid, draft: NewDonation) -> Result<Donation, DomainError>;

    /// All donations recorded against `cause_id`, most recently created
    /// first.
    async fn list_for_cause(&self, cause_id: Uuid) -> Result<Vec<Donation>, DomainError>;
}
