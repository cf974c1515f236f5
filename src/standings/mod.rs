//! Standings requests: navigation and the group-table / bracket dispatch.

mod navigation;
mod service;

pub use navigation::{resolve_navigation, ResolvedNavigation};
pub use service::StandingsService;

use thiserror::Error;

use crate::storage::StorageError;

/// Why a standings request could not be answered.
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("season_id, sport_id and sport_category_id are required")]
    MissingFilters,

    #[error("Stage not found: {0}")]
    StageNotFound(String),

    #[error("Unrecognized competition stage: {0}")]
    UnrecognizedCompetitionStage(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
