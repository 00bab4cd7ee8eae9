//! Causeway API — HTTP layer for the giving backend.

pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;
