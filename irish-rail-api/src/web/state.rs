//! Application state for the web layer.

use std::sync::Arc;

use crate::normalize::RailService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Normalization service over the realtime API
    pub rail: Arc<RailService>,
}

impl AppState {
    pub fn new(rail: RailService) -> Self {
        Self {
            rail: Arc::new(rail),
        }
    }
}
