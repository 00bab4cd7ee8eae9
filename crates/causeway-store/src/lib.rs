//! Causeway Store — SQLite implementations of the repository traits.
//!
//! Records are stamped with ids and timestamps here, using the injected
//! [`Clock`](causeway_core::clock::Clock). The `causes.title` unique index is
//! the arbiter of title uniqueness: a violated index surfaces as a
//! field-level validation error, so two concurrent creates with the same
//! title cannot both succeed.

mod cause_repository;
mod donation_repository;
mod row;

pub use cause_repository::SqliteCauseRepository;
pub use donation_repository::SqliteDonationRepository;
