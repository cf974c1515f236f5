//! Standings and stage navigation endpoints.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use super::non_empty;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{StandingsFilters, StandingsNavigation, StandingsResponse};

#[derive(Debug, Deserialize)]
pub struct StandingsParams {
    pub season_id: Option<String>,
    pub sport_id: Option<String>,
    pub sport_category_id: Option<String>,
    pub stage_id: Option<String>,
}

impl From<StandingsParams> for StandingsFilters {
    fn from(params: StandingsParams) -> Self {
        StandingsFilters {
            season_id: non_empty(params.season_id).map(Into::into),
            sport_id: non_empty(params.sport_id).map(Into::into),
            sport_category_id: non_empty(params.sport_category_id).map(Into::into),
            stage_id: non_empty(params.stage_id).map(Into::into),
        }
    }
}

pub async fn get_standings(
    State(state): State<AppState>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let filters = StandingsFilters::from(params);
    let response = state.standings.get_standings(&filters).await?;
    Ok(Json(response))
}

pub async fn get_navigation(
    State(state): State<AppState>,
    Query(params): Query<StandingsParams>,
) -> Result<Json<StandingsNavigation>, ApiError> {
    let filters = StandingsFilters::from(params);
    let navigation = state.standings.navigation(&filters).await?;
    Ok(Json(navigation))
}
