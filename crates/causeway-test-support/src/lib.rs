//! Shared test clocks and in-memory repositories for the Causeway backend.

mod clock;
mod repository;

pub use clock::{FixedClock, StepClock};
pub use repository::{
    FailingCauseRepository, FailingDonationRepository, InMemoryCauseRepository,
    InMemoryDonationRepository,
};
