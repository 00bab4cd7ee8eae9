//! Field-level validation helpers shared by the payload types.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::FieldErrors;

/// Message for a field absent from the payload.
pub const MSG_REQUIRED: &str = "This field is required.";
/// Message for a field present but empty.
pub const MSG_BLANK: &str = "This field may not be blank.";
/// Message for a malformed URL.
pub const MSG_INVALID_URL: &str = "Enter a valid URL.";
/// Message for a malformed email address.
pub const MSG_INVALID_EMAIL: &str = "Enter a valid email address.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // One @, non-empty local part, domain with at least one dot.
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Message for a field exceeding its maximum length.
#[must_use]
pub fn max_length_message(limit: usize) -> String {
    format!("Ensure this field has no more than {limit} characters.")
}

/// Requires `value` to be present, non-blank after trimming, and within
/// `max_length` characters. Returns the trimmed text on success; records an
/// error under `field` otherwise.
pub fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    max_length: usize,
) -> Option<String> {
    let Some(raw) = value else {
        errors.push(field, MSG_REQUIRED);
        return None;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, MSG_BLANK);
        return None;
    }
    if trimmed.chars().count() > max_length {
        errors.push(field, max_length_message(max_length));
        return None;
    }
    Some(trimmed.to_string())
}

/// True when `candidate` parses as an absolute http(s)/ftp(s) URL with a host.
///
/// `"http//image"` has no scheme separator and is rejected.
#[must_use]
pub fn is_well_formed_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp" | "ftps") && url.has_host()
        }
        Err(_) => false,
    }
}

/// True when `candidate` looks like an email address.
#[must_use]
pub fn is_well_formed_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_missing_field() {
        let mut errors = FieldErrors::new();
        let value = required_text(&mut errors, "title", None, 2000);

        assert!(value.is_none());
        assert_eq!(errors.get("title"), Some(&[MSG_REQUIRED.to_string()][..]));
    }

    #[test]
    fn test_required_text_blank_field() {
        let mut errors = FieldErrors::new();
        let value = required_text(&mut errors, "title", Some("   "), 2000);

        assert!(value.is_none());
        assert_eq!(errors.get("title"), Some(&[MSG_BLANK.to_string()][..]));
    }

    #[test]
    fn test_required_text_trims_whitespace() {
        let mut errors = FieldErrors::new();
        let value = required_text(&mut errors, "name", Some("  Sarki Abdul "), 2000);

        assert_eq!(value.as_deref(), Some("Sarki Abdul"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_text_enforces_max_length() {
        let mut errors = FieldErrors::new();
        let long = "x".repeat(2001);
        let value = required_text(&mut errors, "title", Some(&long), 2000);

        assert!(value.is_none());
        assert_eq!(
            errors.get("title"),
            Some(&[max_length_message(2000)][..])
        );
    }

    #[test]
    fn test_well_formed_urls_accepted() {
        assert!(is_well_formed_url("https://www.google.com/url?sa=t"));
        assert!(is_well_formed_url("http://home.com"));
        assert!(is_well_formed_url("ftp://files.example.org/a.png"));
    }

    #[test]
    fn test_malformed_urls_rejected() {
        // Missing the :// separator parses as a relative reference.
        assert!(!is_well_formed_url("http//image"));
        assert!(!is_well_formed_url("not a url"));
        assert!(!is_well_formed_url("mailto:someone@example.com"));
        assert!(!is_well_formed_url(""));
    }

    #[test]
    fn test_well_formed_emails_accepted() {
        assert!(is_well_formed_email("sarkiihima44@gmail.com"));
        assert!(is_well_formed_email("a.b+c@sub.example.org"));
    }

    #[test]
    fn test_malformed_emails_rejected() {
        assert!(!is_well_formed_email("plainaddress"));
        assert!(!is_well_formed_email("missing@dot"));
        assert!(!is_well_formed_email("two@@example.com"));
        assert!(!is_well_formed_email("spaces in@example.com"));
    }
}
