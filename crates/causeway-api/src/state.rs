//! Shared application state.

use std::sync::Arc;

use causeway_core::repository::{CauseRepository, DonationRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Durable cause store.
    pub causes: Arc<dyn CauseRepository>,
    /// Durable donation store.
    pub donations: Arc<dyn DonationRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(causes: Arc<dyn CauseRepository>, donations: Arc<dyn DonationRepository>) -> Self {
        Self { causes, donations }
    }
}
