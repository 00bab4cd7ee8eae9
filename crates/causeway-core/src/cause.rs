//! The `Cause` record and its validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldErrors;
use crate::validate::{self, MSG_INVALID_URL};

/// Maximum length of a cause title.
pub const TITLE_MAX_LENGTH: usize = 2000;
/// Maximum length of a cause description.
pub const DESCRIPTION_MAX_LENGTH: usize = 5000;
/// Maximum length of a cause image URL.
pub const IMAGE_URL_MAX_LENGTH: usize = 2000;

/// Message surfaced when a write collides with an existing title.
pub const MSG_TITLE_EXISTS: &str = "cause with this title already exists.";

/// A persisted fundraising campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cause {
    /// Unique identifier, generated at creation, immutable.
    pub id: Uuid,
    /// Campaign title, unique across all causes.
    pub title: String,
    /// Campaign description.
    pub description: String,
    /// Campaign image URL.
    pub image_url: String,
    /// Set when the record is created.
    pub created_at: DateTime<Utc>,
    /// Set at creation and not refreshed by updates.
    pub updated_at: DateTime<Utc>,
}

/// Raw request payload for creating or updating a cause. All fields are
/// optional at this stage so that each missing field can be reported
/// individually by [`CausePayload::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CausePayload {
    /// Campaign title.
    pub title: Option<String>,
    /// Campaign description.
    pub description: Option<String>,
    /// Campaign image URL.
    pub image_url: Option<String>,
}

/// A validated, normalized cause draft ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCause {
    /// Campaign title.
    pub title: String,
    /// Campaign description.
    pub description: String,
    /// Campaign image URL.
    pub image_url: String,
}

impl CausePayload {
    /// Validates the payload, producing a [`NewCause`] or one error entry per
    /// offending field.
    ///
    /// Title uniqueness is deliberately not checked here; the store's unique
    /// index is the arbiter so concurrent duplicate creates cannot both
    /// succeed.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] when any field is missing, blank, over its
    /// length limit, or (for `image_url`) not an absolute URL.
    pub fn validate(&self) -> Result<NewCause, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = validate::required_text(
            &mut errors,
            "title",
            self.title.as_deref(),
            TITLE_MAX_LENGTH,
        );
        let description = validate::required_text(
            &mut errors,
            "description",
            self.description.as_deref(),
            DESCRIPTION_MAX_LENGTH,
        );
        let image_url = validate::required_text(
            &mut errors,
            "image_url",
            self.image_url.as_deref(),
            IMAGE_URL_MAX_LENGTH,
        )
        .and_then(|url| {
            if validate::is_well_formed_url(&url) {
                Some(url)
            } else {
                errors.push("image_url", MSG_INVALID_URL);
                None
            }
        });

        match (title, description, image_url) {
            (Some(title), Some(description), Some(image_url)) if errors.is_empty() => {
                Ok(NewCause {
                    title,
                    description,
                    image_url,
                })
            }
            _ => Err(errors),
        }
    }
}
