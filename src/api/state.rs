//! Shared handler state.

use std::sync::Arc;

use crate::standings::StandingsService;
use crate::storage::StandingsStore;

#[derive(Clone)]
pub struct AppState {
    pub standings: StandingsService,
    pub cors_origin: String,
}

impl AppState {
    pub fn new(store: Arc<dyn StandingsStore>, cors_origin: impl Into<String>) -> Self {
        Self {
            standings: StandingsService::new(store),
            cors_origin: cors_origin.into(),
        }
    }
}
