//! Per-stage match listing.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::api::state::AppState;
use crate::api::{ApiError, Pagination, PaginationMeta};
use crate::models::{MatchForStandings, MatchStatus, StageId};
use crate::storage::MatchQuery;

#[derive(Debug, Deserialize)]
pub struct MatchListParams {
    pub status: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchForStandings>,
    pub pagination: PaginationMeta,
}

/// Matches of one stage in schedule order, joined with team and school data.
pub async fn list_stage_matches(
    State(state): State<AppState>,
    Path(stage_id): Path<String>,
    Query(params): Query<MatchListParams>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let status = non_empty(params.status)
        .map(|s| s.parse::<MatchStatus>())
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let stage_id = StageId::from(stage_id);
    let matches = state
        .standings
        .matches(&stage_id, MatchQuery { status })
        .await?;

    let pagination = Pagination::new(params.page, params.page_size);
    let meta = PaginationMeta::new(&pagination, matches.len() as u32);

    Ok(Json(MatchListResponse {
        matches: pagination.slice(&matches).to_vec(),
        pagination: meta,
    }))
}
