//! The `Donation` record, the `Amount` decimal type, and their validation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::error::FieldErrors;
use crate::validate::{self, MSG_INVALID_EMAIL};

/// Maximum length of a donor name.
pub const NAME_MAX_LENGTH: usize = 2000;
/// Maximum length of a donor email.
pub const EMAIL_MAX_LENGTH: usize = 2000;

/// Message for a value that is not a decimal number at all.
pub const MSG_INVALID_NUMBER: &str = "A valid number is required.";
/// Message for a value with more than four significant digits.
pub const MSG_MAX_DIGITS: &str = "Ensure that there are no more than 4 digits in total.";
/// Message for a value with more than two fractional digits.
pub const MSG_MAX_DECIMALS: &str = "Ensure that there are no more than 2 decimal places.";
/// Message for a value with more than two digits before the decimal point.
pub const MSG_MAX_WHOLE_DIGITS: &str =
    "Ensure that there are no more than 2 digits before the decimal point.";
/// Message for a negative value.
pub const MSG_NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";

/// A donation amount: a decimal with at most four significant digits and at
/// most two fractional digits, held exactly as integer cents. Values with
/// excess precision are rejected at parse time, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

impl Amount {
    /// Builds an amount from integer cents. Used when loading from the store,
    /// which persists cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in integer cents.
    #[must_use]
    pub fn cents(self) -> i64 {
        self.0
    }

    /// Parses a decimal string such as `"10.33"`, `"7"`, or `"0.5"`.
    ///
    /// # Errors
    ///
    /// Returns the appropriate field message when the string is not a
    /// non-negative decimal within four total and two fractional digits.
    pub fn parse(raw: &str) -> Result<Self, &'static str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MSG_INVALID_NUMBER);
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            // Still insist the remainder is numeric so "-abc" reads as a
            // malformed number rather than a negative one.
            if rest.chars().any(|c| !c.is_ascii_digit() && c != '.') {
                return Err(MSG_INVALID_NUMBER);
            }
            return Err(MSG_NEGATIVE);
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(MSG_INVALID_NUMBER);
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MSG_INVALID_NUMBER);
        }

        // Leading zeros carry no significance; trailing fractional zeros do.
        let whole_digits = whole.trim_start_matches('0').len();
        let fraction_digits = fraction.len();
        if whole_digits + fraction_digits > 4 {
            return Err(MSG_MAX_DIGITS);
        }
        if fraction_digits > 2 {
            return Err(MSG_MAX_DECIMALS);
        }
        if whole_digits > 2 {
            return Err(MSG_MAX_WHOLE_DIGITS);
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MSG_INVALID_NUMBER)?
        };
        let fraction_value: i64 = match fraction_digits {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| MSG_INVALID_NUMBER)? * 10,
            _ => fraction.parse().map_err(|_| MSG_INVALID_NUMBER)?,
        };

        Ok(Self(whole_value * 100 + fraction_value))
    }

    /// Parses an amount from a JSON value: either a number (`10.33`) or a
    /// decimal string (`"10.33"`).
    ///
    /// # Errors
    ///
    /// Same messages as [`Amount::parse`]; any other JSON type is a malformed
    /// number.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, &'static str> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            serde_json::Value::Number(n) => Self::parse(&n.to_string()),
            _ => Err(MSG_INVALID_NUMBER),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Amount {
    // Amounts go out as JSON numbers, matching the wire contract.
    #[allow(clippy::cast_precision_loss)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

/// A persisted contribution against a single cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    /// Unique identifier, generated at creation, immutable.
    pub id: Uuid,
    /// The cause this donation belongs to. Deleting the cause neither
    /// deletes this record nor is blocked by it.
    pub cause_id: Uuid,
    /// Donor's display name.
    pub name: String,
    /// Donor's email.
    pub email: String,
    /// Amount donated.
    pub amount: Amount,
    /// Set when the record is created.
    pub created_at: DateTime<Utc>,
    /// Set at creation; donations are never updated through the API.
    pub updated_at: DateTime<Utc>,
}

/// Raw request payload for the contribute action. `amount` is kept as a raw
/// JSON value so both `10.33` and `"10.33"` are accepted and excess precision
/// can be detected before any float rounding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationPayload {
    /// Donor's display name.
    pub name: Option<String>,
    /// Donor's email.
    pub email: Option<String>,
    /// Amount donated.
    pub amount: Option<serde_json::Value>,
}

/// A validated, normalized donation draft ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonation {
    /// Donor's display name.
    pub name: String,
    /// Donor's email.
    pub email: String,
    /// Amount donated.
    pub amount: Amount,
}

impl DonationPayload {
    /// Validates the payload, producing a [`NewDonation`] or one error entry
    /// per offending field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] when any field is missing or malformed.
    pub fn validate(&self) -> Result<NewDonation, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name =
            validate::required_text(&mut errors, "name", self.name.as_deref(), NAME_MAX_LENGTH);
        let email = validate::required_text(
            &mut errors,
            "email",
            self.email.as_deref(),
            EMAIL_MAX_LENGTH,
        )
        .and_then(|email| {
            if validate::is_well_formed_email(&email) {
                Some(email)
            } else {
                errors.push("email", MSG_INVALID_EMAIL);
                None
            }
        });
        let amount = match &self.amount {
            None => {
                errors.push("amount", validate::MSG_REQUIRED);
                None
            }
            Some(value) => match Amount::from_json(value) {
                Ok(amount) => Some(amount),
                Err(message) => {
                    errors.push("amount", message);
                    None
                }
            },
        };

        match (name, email, amount) {
            (Some(name), Some(email), Some(amount)) if errors.is_empty() => Ok(NewDonation {
                name,
                email,
                amount,
            }),
            _ => Err(errors),
        }
    }
}
