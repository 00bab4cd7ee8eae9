//! Test repositories — in-memory and always-failing implementations of the
//! store traits.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use causeway_core::cause::{Cause, MSG_TITLE_EXISTS, NewCause};
use causeway_core::clock::Clock;
use causeway_core::donation::{Donation, NewDonation};
use causeway_core::error::{DomainError, FieldErrors};
use causeway_core::repository::{CauseRepository, DonationRepository};
use uuid::Uuid;

/// An in-memory cause store. Honors the same contract as the SQLite-backed
/// repository, including the title uniqueness rule and newest-first listing.
pub struct InMemoryCauseRepository {
    clock: Arc<dyn Clock>,
    causes: Mutex<Vec<Cause>>,
}

impl InMemoryCauseRepository {
    /// Creates an empty store stamping records with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            causes: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every stored cause in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn all(&self) -> Vec<Cause> {
        self.causes.lock().unwrap().clone()
    }

    fn duplicate_title_error() -> DomainError {
        DomainError::Validation(FieldErrors::single("title", MSG_TITLE_EXISTS))
    }
}

#[async_trait]
impl CauseRepository for InMemoryCauseRepository {
    async fn create(&self, draft: NewCause) -> Result<Cause, DomainError> {
        let mut causes = self.causes.lock().unwrap();
        if causes.iter().any(|c| c.title == draft.title) {
            return Err(Self::duplicate_title_error());
        }

        let now = self.clock.now();
        let cause = Cause {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            created_at: now,
            updated_at: now,
        };
        causes.push(cause.clone());
        Ok(cause)
    }

    async fn list(&self) -> Result<Vec<Cause>, DomainError> {
        let mut causes = self.causes.lock().unwrap().clone();
        causes.sort_by_key(|c| std::cmp::Reverse(c.created_at));
        Ok(causes)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Cause>, DomainError> {
        let causes = self.causes.lock().unwrap();
        Ok(causes.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, id: Uuid, draft: NewCause) -> Result<Option<Cause>, DomainError> {
        let mut causes = self.causes.lock().unwrap();
        // An unknown id is None before any title check, matching the
        // SQLite repository (its update affects 0 rows without ever
        // touching the unique index).
        let Some(position) = causes.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        if causes.iter().any(|c| c.id != id && c.title == draft.title) {
            return Err(Self::duplicate_title_error());
        }

        let cause = &mut causes[position];
        cause.title = draft.title;
        cause.description = draft.description;
        cause.image_url = draft.image_url;
        // updated_at deliberately untouched.
        Ok(Some(cause.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut causes = self.causes.lock().unwrap();
        let before = causes.len();
        causes.retain(|c| c.id != id);
        Ok(causes.len() < before)
    }
}

/// An in-memory donation store.
pub struct InMemoryDonationRepository {
    clock: Arc<dyn Clock>,
    donations: Mutex<Vec<Donation>>,
}

impl InMemoryDonationRepository {
    /// Creates an empty store stamping records with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            donations: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every stored donation in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn all(&self) -> Vec<Donation> {
        self.donations.lock().unwrap().clone()
    }
}

#[async_trait]
impl DonationRepository for InMemoryDonationRepository {
    async fn create(&self, cause_id: Uuid, draft: NewDonation) -> Result<Donation, DomainError> {
        let now = self.clock.now();
        let donation = Donation {
            id: Uuid::new_v4(),
            cause_id,
            name: draft.name,
            email: draft.email,
            amount: draft.amount,
            created_at: now,
            updated_at: now,
        };
        self.donations.lock().unwrap().push(donation.clone());
        Ok(donation)
    }

    async fn list_for_cause(&self, cause_id: Uuid) -> Result<Vec<Donation>, DomainError> {
        let mut donations: Vec<Donation> = self
            .donations
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.cause_id == cause_id)
            .cloned()
            .collect();
        donations.sort_by_key(|d| std::cmp::Reverse(d.created_at));
        Ok(donations)
    }
}

/// A cause store whose every operation fails with an infrastructure error.
/// Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingCauseRepository;

#[async_trait]
impl CauseRepository for FailingCauseRepository {
    async fn create(&self, _draft: NewCause) -> Result<Cause, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list(&self) -> Result<Vec<Cause>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find(&self, _id: Uuid) -> Result<Option<Cause>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn update(&self, _id: Uuid, _draft: NewCause) -> Result<Option<Cause>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A donation store whose every operation fails with an infrastructure
/// error.
#[derive(Debug)]
pub struct FailingDonationRepository;

#[async_trait]
impl DonationRepository for FailingDonationRepository {
    async fn create(&self, _cause_id: Uuid, _draft: NewDonation) -> Result<Donation, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_for_cause(&self, _cause_id: Uuid) -> Result<Vec<Donation>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::clock::FixedClock;

    fn draft(title: &str) -> NewCause {
        NewCause {
            title: title.to_owned(),
            description: "Education on hygiene and health".to_owned(),
            image_url: "https://www.google.com/url".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_updating_an_unknown_id_is_none_even_when_the_title_collides() {
        let repo = InMemoryCauseRepository::new(Arc::new(FixedClock(Utc::now())));
        repo.create(draft("Steps for Shelter")).await.unwrap();

        let result = repo.update(Uuid::new_v4(), draft("Steps for Shelter")).await;

        assert!(matches!(result, Ok(None)));
        assert_eq!(repo.all().len(), 1);
    }
}
