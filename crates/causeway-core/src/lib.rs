//! Causeway Core — shared domain types and validation.
//!
//! This crate defines the `Cause` and `Donation` records, the validation
//! layer that turns raw request payloads into normalized drafts, and the
//! repository traits the storage layer implements. It contains no
//! infrastructure code.

pub mod cause;
pub mod clock;
pub mod donation;
pub mod error;
pub mod repository;
pub mod validate;
