//! Stage navigation for a season's sport category.

use tracing::debug;

use super::StandingsError;
use crate::models::{
    CategorySummary, SeasonId, SeasonSummary, SportCategoryId, SportId, SportSummary,
    SportsSeasonStage, StandingsNavigation, StandingsStage,
};
use crate::storage::LeagueData;

/// Navigation plus the stage rows it was built from, in stage order.
#[derive(Debug, Clone)]
pub struct ResolvedNavigation {
    pub navigation: StandingsNavigation,
    pub stages: Vec<SportsSeasonStage>,
}

/// Resolve season, sport and category display data and the ordered stage list.
///
/// Fails with `StageNotFound` when the combination has no stages, including
/// when any of the three ids is unknown or the category belongs to another
/// sport.
pub fn resolve_navigation(
    data: &LeagueData,
    season_id: &SeasonId,
    sport_id: &SportId,
    sport_category_id: &SportCategoryId,
) -> Result<ResolvedNavigation, StandingsError> {
    let not_found = || {
        StandingsError::StageNotFound(format!(
            "no stages for season {}, sport {}, category {}",
            season_id, sport_id, sport_category_id
        ))
    };

    let season = data.season(season_id).ok_or_else(not_found)?;
    let sport = data.sport(sport_id).ok_or_else(not_found)?;
    let category = data
        .sport_category(sport_category_id)
        .filter(|c| &c.sport_id == sport_id)
        .ok_or_else(not_found)?;

    let stages = data.stages_for(season_id, sport_category_id);
    if stages.is_empty() {
        return Err(not_found());
    }
    debug!(
        "Resolved {} stage(s) for {} {}",
        stages.len(),
        season.display_name(),
        category.display_name()
    );

    let navigation = StandingsNavigation {
        season: SeasonSummary {
            id: season.id.clone(),
            name: season.display_name(),
            start_at: season.start_at,
            end_at: season.end_at,
        },
        sport: SportSummary {
            id: sport.id.clone(),
            name: sport.name.clone(),
        },
        category: CategorySummary {
            id: category.id.clone(),
            name: category.display_name(),
        },
        stages: stages
            .iter()
            .map(|s| StandingsStage {
                id: s.id.clone(),
                name: s.stage_name.clone(),
                competition_stage: s.competition_stage.clone(),
                order: s.order,
            })
            .collect(),
    };

    Ok(ResolvedNavigation { navigation, stages })
}
