//! Derived standings shapes. None of these are persisted; they are rebuilt
//! from match data on every request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{
    CompetitionStageKind, MatchId, MatchStatus, ParticipantForStandings, SeasonId,
    SportCategoryId, SportId, StageId, TeamId,
};

/// Points for a win.
pub const POINTS_WIN: u32 = 3;

/// Points for each side of a draw.
pub const POINTS_DRAW: u32 = 1;

/// A team's accumulated record within a group stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub team_id: TeamId,
    pub team_name: String,
    pub school_name: String,
    pub school_abbreviation: String,
    pub school_logo_url: Option<String>,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    /// Always `goals_for - goals_against`
    pub goal_difference: i64,
    pub points: u32,
    /// 1-based rank, 0 until ranked
    pub position: u32,
}

impl StandingsEntry {
    /// A zeroed entry carrying the participant's display fields.
    pub fn new(participant: &ParticipantForStandings) -> Self {
        Self {
            team_id: participant.team_id.clone(),
            team_name: participant.team_name.clone(),
            school_name: participant.school_name.clone(),
            school_abbreviation: participant.school_abbreviation.clone(),
            school_logo_url: participant.school_logo_url.clone(),
            matches_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            position: 0,
        }
    }

    /// Record one played match from this team's point of view.
    pub fn record(&mut self, scored: i64, conceded: i64) {
        self.matches_played += 1;
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = self.goals_for.saturating_sub(self.goals_against);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_WIN;
            }
            Ordering::Less => {
                self.losses += 1;
            }
            Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_DRAW;
            }
        }
    }
}

/// One table within a group stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsGroup {
    pub group_name: Option<String>,
    pub teams: Vec<StandingsEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStageStandings {
    pub stage_id: StageId,
    pub stage_name: String,
    pub competition_stage: CompetitionStageKind,
    pub groups: Vec<StandingsGroup>,
}

/// A team as shown in a bracket slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTeam {
    pub id: TeamId,
    pub name: String,
    pub school_name: String,
    pub school_abbreviation: String,
    pub school_logo_url: Option<String>,
    pub score: Option<i64>,
}

impl From<&ParticipantForStandings> for BracketTeam {
    fn from(p: &ParticipantForStandings) -> Self {
        Self {
            id: p.team_id.clone(),
            name: p.team_name.clone(),
            school_name: p.school_name.clone(),
            school_abbreviation: p.school_abbreviation.clone(),
            school_logo_url: p.school_logo_url.clone(),
            score: p.match_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub match_id: MatchId,
    pub match_name: String,
    pub match_status: MatchStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub venue: String,
    pub best_of: u32,
    pub team1: Option<BracketTeam>,
    pub team2: Option<BracketTeam>,
    pub winner: Option<BracketTeam>,
    pub round: u32,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketStandings {
    pub stage_id: StageId,
    pub stage_name: String,
    pub competition_stage: CompetitionStageKind,
    pub bracket: Vec<BracketMatch>,
}

/// Standings in whichever shape the stage calls for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Standings {
    GroupStage(GroupStageStandings),
    Bracket(BracketStandings),
}

impl Standings {
    pub fn stage_id(&self) -> &StageId {
        match self {
            Standings::GroupStage(s) => &s.stage_id,
            Standings::Bracket(s) => &s.stage_id,
        }
    }
}

/// A stage as listed in navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsStage {
    pub id: StageId,
    pub name: String,
    pub competition_stage: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub id: SeasonId,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportSummary {
    pub id: SportId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: SportCategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsNavigation {
    pub season: SeasonSummary,
    pub sport: SportSummary,
    pub category: CategorySummary,
    pub stages: Vec<StandingsStage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub navigation: StandingsNavigation,
    pub standings: Standings,
}

/// Request filters. The first three are required to compute anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsFilters {
    pub season_id: Option<SeasonId>,
    pub sport_id: Option<SportId>,
    pub sport_category_id: Option<SportCategoryId>,
    pub stage_id: Option<StageId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str) -> ParticipantForStandings {
        ParticipantForStandings {
            team_id: id.into(),
            team_name: format!("{} Team", id),
            school_name: format!("{} School", id),
            school_abbreviation: id.to_uppercase(),
            school_logo_url: None,
            match_score: None,
        }
    }

    #[test]
    fn test_new_entry_is_zeroed() {
        let entry = StandingsEntry::new(&participant("usc"));
        assert_eq!(entry.matches_played, 0);
        assert_eq!(entry.points, 0);
        assert_eq!(entry.position, 0);
        assert_eq!(entry.school_abbreviation, "USC");
    }

    #[test]
    fn test_record_win_loss_draw() {
        let mut entry = StandingsEntry::new(&participant("usc"));
        entry.record(3, 1);
        entry.record(0, 2);
        entry.record(1, 1);

        assert_eq!(entry.matches_played, 3);
        assert_eq!((entry.wins, entry.losses, entry.draws), (1, 1, 1));
        assert_eq!(entry.points, 4);
        assert_eq!(entry.goals_for, 4);
        assert_eq!(entry.goals_against, 4);
        assert_eq!(entry.goal_difference, 0);
    }

    #[test]
    fn test_record_saturates_on_extreme_scores() {
        let mut entry = StandingsEntry::new(&participant("usc"));
        entry.record(i64::MAX, 0);
        entry.record(1, i64::MAX);
        entry.record(0, 1);

        assert_eq!(entry.goals_for, i64::MAX);
        assert_eq!(entry.goals_against, i64::MAX);
        assert_eq!(entry.goal_difference, 0);
        assert_eq!((entry.wins, entry.losses), (1, 2));
    }

    #[test]
    fn test_standings_tagged_serialization() {
        let standings = Standings::Bracket(BracketStandings {
            stage_id: "s1".into(),
            stage_name: "Finals".to_string(),
            competition_stage: CompetitionStageKind::Finals,
            bracket: Vec::new(),
        });
        let json = serde_json::to_value(&standings).unwrap();
        assert_eq!(json["type"], "bracket");
        assert_eq!(json["competition_stage"], "finals");
        assert_eq!(standings.stage_id().as_str(), "s1");
    }
}
