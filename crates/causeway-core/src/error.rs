//! Domain error types.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Per-field validation errors, keyed by field name.
///
/// Serializes as a JSON object mapping each offending field to the list of
/// messages for it, e.g. `{"title": ["This field is required."]}`. The map is
/// ordered so error bodies are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set holding a single message for `field`.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Appends a message for `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// True when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A payload failed field-level validation, or a store constraint
    /// (unique title) rejected the write.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_serialize_as_object_of_message_lists() {
        let mut errors = FieldErrors::new();
        errors.push("title", "This field is required.");
        errors.push("image_url", "Enter a valid URL.");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": ["This field is required."],
                "image_url": ["Enter a valid URL."],
            })
        );
    }

    #[test]
    fn test_push_appends_to_existing_field() {
        let mut errors = FieldErrors::new();
        errors.push("amount", "first");
        errors.push("amount", "second");

        assert_eq!(
            errors.get("amount"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
    }

    #[test]
    fn test_display_joins_fields() {
        let mut errors = FieldErrors::new();
        errors.push("email", "Enter a valid email address.");
        errors.push("name", "This field is required.");

        let rendered = errors.to_string();
        assert_eq!(
            rendered,
            "email: Enter a valid email address.; name: This field is required."
        );
    }
}
