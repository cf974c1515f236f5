//! Ordering group-stage tables.

use std::cmp::Ordering;

use crate::models::{
    CompetitionStageKind, GroupStageStandings, SportsSeasonStage, StandingsEntry, StandingsGroup,
};

/// Table order: points, then goal difference, then goals scored, all descending.
pub fn compare_entries(a: &StandingsEntry, b: &StandingsEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Sort entries into table order and assign dense 1-based positions.
///
/// The sort is stable, so teams level on every key keep their incoming order.
pub fn rank_standings(mut entries: Vec<StandingsEntry>) -> Vec<StandingsEntry> {
    entries.sort_by(compare_entries);
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.position = i as u32 + 1;
    }
    entries
}

/// Wrap ranked entries into the single-table group stage shape.
pub fn group_stage_standings(
    stage: &SportsSeasonStage,
    kind: CompetitionStageKind,
    ranked: Vec<StandingsEntry>,
) -> GroupStageStandings {
    GroupStageStandings {
        stage_id: stage.id.clone(),
        stage_name: stage.stage_name.clone(),
        competition_stage: kind,
        groups: vec![StandingsGroup {
            group_name: None,
            teams: ranked,
        }],
    }
}
