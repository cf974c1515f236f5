//! The standings façade: filters in, navigation plus a group table or bracket out.

use std::sync::Arc;

use tracing::{debug, info};

use super::{resolve_navigation, ResolvedNavigation, StandingsError};
use crate::calculate::{
    aggregate_results, bracket_standings, build_bracket, group_stage_standings, rank_standings,
};
use crate::models::{
    CompetitionStageKind, MatchForStandings, SeasonId, SportCategoryId, SportId,
    SportsSeasonStage, StageId, Standings, StandingsFilters, StandingsNavigation,
    StandingsResponse,
};
use crate::storage::{LeagueData, MatchQuery, StandingsStore};

/// Answers standings requests against a store.
///
/// Holds no state besides the store handle. Every call takes one fresh
/// snapshot and recomputes from it.
#[derive(Clone)]
pub struct StandingsService {
    store: Arc<dyn StandingsStore>,
}

impl StandingsService {
    pub fn new(store: Arc<dyn StandingsStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn StandingsStore {
        self.store.as_ref()
    }

    /// Navigation for the filtered season, sport and category.
    pub async fn navigation(
        &self,
        filters: &StandingsFilters,
    ) -> Result<StandingsNavigation, StandingsError> {
        let (season_id, sport_id, category_id) = required_filters(filters)?;
        let data = self.store.snapshot().await?;
        Ok(resolve_navigation(&data, season_id, sport_id, category_id)?.navigation)
    }

    /// Standings for the requested stage, or the first stage when none is given.
    pub async fn get_standings(
        &self,
        filters: &StandingsFilters,
    ) -> Result<StandingsResponse, StandingsError> {
        let (season_id, sport_id, category_id) = required_filters(filters)?;
        let data = self.store.snapshot().await?;
        let ResolvedNavigation { navigation, stages } =
            resolve_navigation(&data, season_id, sport_id, category_id)?;

        let stage = match &filters.stage_id {
            Some(stage_id) => stages
                .iter()
                .find(|s| &s.id == stage_id)
                .ok_or_else(|| StandingsError::StageNotFound(stage_id.to_string()))?,
            None => stages
                .first()
                .ok_or_else(|| StandingsError::StageNotFound("no stages".to_string()))?,
        };

        let standings = stage_standings(&data, stage)?;
        info!(
            "Computed {} standings for stage {}",
            stage.competition_stage, stage.id
        );

        Ok(StandingsResponse {
            navigation,
            standings,
        })
    }

    /// Matches of one stage in schedule order.
    pub async fn matches(
        &self,
        stage_id: &StageId,
        query: MatchQuery,
    ) -> Result<Vec<MatchForStandings>, StandingsError> {
        let data = self.store.snapshot().await?;
        Ok(data.matches_for(stage_id, query))
    }
}

/// Compute standings for a single stage according to its kind.
fn stage_standings(
    data: &LeagueData,
    stage: &SportsSeasonStage,
) -> Result<Standings, StandingsError> {
    let kind = stage
        .kind()
        .map_err(|e| StandingsError::UnrecognizedCompetitionStage(e.0))?;

    match kind {
        CompetitionStageKind::GroupStage => {
            let matches = data.matches_for(&stage.id, MatchQuery::finished());
            debug!("Aggregating {} finished match(es)", matches.len());
            let ranked = rank_standings(aggregate_results(&matches));
            Ok(Standings::GroupStage(group_stage_standings(
                stage, kind, ranked,
            )))
        }
        CompetitionStageKind::Playins
        | CompetitionStageKind::Playoffs
        | CompetitionStageKind::Finals => {
            let matches = data.matches_for(&stage.id, MatchQuery::all());
            debug!("Laying out {} bracket match(es)", matches.len());
            Ok(Standings::Bracket(bracket_standings(
                stage,
                kind,
                build_bracket(&matches),
            )))
        }
    }
}

fn required_filters(
    filters: &StandingsFilters,
) -> Result<(&SeasonId, &SportId, &SportCategoryId), StandingsError> {
    match (
        &filters.season_id,
        &filters.sport_id,
        &filters.sport_category_id,
    ) {
        (Some(season), Some(sport), Some(category)) => Ok((season, sport, category)),
        _ => Err(StandingsError::MissingFilters),
    }
}
