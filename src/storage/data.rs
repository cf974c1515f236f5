//! An in-memory snapshot of the league tables and the joins over them.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::warn;

use super::jsonl::{EntityType, JsonlReader, JsonlWriter};
use super::{MatchQuery, StorageConfig, StorageError};
use crate::models::{
    Match, MatchForStandings, MatchParticipant, ParticipantForStandings, School, SchoolId,
    SchoolTeam, Season, SeasonId, Sport, SportCategory, SportCategoryId, SportId,
    SportsSeasonStage, StageId, TeamId,
};

/// All league tables the standings engine reads.
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub seasons: Vec<Season>,
    pub sports: Vec<Sport>,
    pub sport_categories: Vec<SportCategory>,
    pub schools: Vec<School>,
    pub school_teams: Vec<SchoolTeam>,
    pub stages: Vec<SportsSeasonStage>,
    pub matches: Vec<Match>,
    pub match_participants: Vec<MatchParticipant>,
}

impl LeagueData {
    /// Load every table from the data directory. Missing files are empty tables.
    pub fn load(config: &StorageConfig) -> Result<Self, StorageError> {
        Ok(Self {
            seasons: JsonlReader::for_entity(config, EntityType::Season).read_all()?,
            sports: JsonlReader::for_entity(config, EntityType::Sport).read_all()?,
            sport_categories: JsonlReader::for_entity(config, EntityType::SportCategory)
                .read_all()?,
            schools: JsonlReader::for_entity(config, EntityType::School).read_all()?,
            school_teams: JsonlReader::for_entity(config, EntityType::SchoolTeam).read_all()?,
            stages: JsonlReader::for_entity(config, EntityType::Stage).read_all()?,
            matches: JsonlReader::for_entity(config, EntityType::Match).read_all()?,
            match_participants: JsonlReader::for_entity(config, EntityType::MatchParticipant)
                .read_all()?,
        })
    }

    /// Write every table to the data directory, replacing existing files.
    pub fn save(&self, config: &StorageConfig) -> Result<usize, StorageError> {
        let mut total = 0;
        total += JsonlWriter::for_entity(config, EntityType::Season).write_all(&self.seasons)?;
        total += JsonlWriter::for_entity(config, EntityType::Sport).write_all(&self.sports)?;
        total += JsonlWriter::for_entity(config, EntityType::SportCategory)
            .write_all(&self.sport_categories)?;
        total += JsonlWriter::for_entity(config, EntityType::School).write_all(&self.schools)?;
        total += JsonlWriter::for_entity(config, EntityType::SchoolTeam)
            .write_all(&self.school_teams)?;
        total += JsonlWriter::for_entity(config, EntityType::Stage).write_all(&self.stages)?;
        total += JsonlWriter::for_entity(config, EntityType::Match).write_all(&self.matches)?;
        total += JsonlWriter::for_entity(config, EntityType::MatchParticipant)
            .write_all(&self.match_participants)?;
        Ok(total)
    }

    pub fn season(&self, id: &SeasonId) -> Option<&Season> {
        self.seasons.iter().find(|s| &s.id == id)
    }

    pub fn sport(&self, id: &SportId) -> Option<&Sport> {
        self.sports.iter().find(|s| &s.id == id)
    }

    pub fn sport_category(&self, id: &SportCategoryId) -> Option<&SportCategory> {
        self.sport_categories.iter().find(|c| &c.id == id)
    }

    pub fn stage(&self, id: &StageId) -> Option<&SportsSeasonStage> {
        self.stages.iter().find(|s| &s.id == id)
    }

    pub fn stages_for(
        &self,
        season_id: &SeasonId,
        sport_category_id: &SportCategoryId,
    ) -> Vec<SportsSeasonStage> {
        let mut stages: Vec<SportsSeasonStage> = self
            .stages
            .iter()
            .filter(|s| &s.season_id == season_id && &s.sport_category_id == sport_category_id)
            .cloned()
            .collect();
        stages.sort_by_key(|s| s.order);
        stages
    }

    /// Matches of a stage joined down to school display fields.
    pub fn matches_for(&self, stage_id: &StageId, query: MatchQuery) -> Vec<MatchForStandings> {
        let teams: HashMap<&TeamId, &SchoolTeam> =
            self.school_teams.iter().map(|t| (&t.id, t)).collect();
        let schools: HashMap<&SchoolId, &School> =
            self.schools.iter().map(|s| (&s.id, s)).collect();

        let mut matches: Vec<&Match> = self
            .matches
            .iter()
            .filter(|m| &m.stage_id == stage_id)
            .filter(|m| query.status.map_or(true, |status| m.status == status))
            .collect();
        matches.sort_by(|a, b| schedule_order(a, b));

        matches
            .into_iter()
            .map(|m| {
                let participants = self
                    .match_participants
                    .iter()
                    .filter(|p| p.match_id == m.id)
                    .map(|p| resolve_participant(p, &teams, &schools))
                    .collect();
                MatchForStandings::from_match(m, participants)
            })
            .collect()
    }
}

/// Scheduled time ascending, unscheduled last, then id for a stable total order.
fn schedule_order(a: &Match, b: &Match) -> Ordering {
    let by_time = match (a.scheduled_at, b.scheduled_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_time.then_with(|| a.id.cmp(&b.id))
}

fn resolve_participant(
    p: &MatchParticipant,
    teams: &HashMap<&TeamId, &SchoolTeam>,
    schools: &HashMap<&SchoolId, &School>,
) -> ParticipantForStandings {
    let team = teams.get(&p.team_id);
    let school = team.and_then(|t| schools.get(&t.school_id));

    if team.is_none() {
        warn!(
            "Participant in match {} references unknown team {}",
            p.match_id, p.team_id
        );
    }

    ParticipantForStandings {
        team_id: p.team_id.clone(),
        team_name: team
            .map(|t| t.name.clone())
            .unwrap_or_else(|| p.team_id.to_string()),
        school_name: school.map(|s| s.name.clone()).unwrap_or_default(),
        school_abbreviation: school.map(|s| s.abbreviation.clone()).unwrap_or_default(),
        school_logo_url: school.and_then(|s| s.logo_url.clone()),
        match_score: p.match_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchStatus;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn data() -> LeagueData {
        let stage: StageId = "stage-1".into();
        let at = |h: u32| Utc.with_ymd_and_hms(2025, 9, 6, h, 0, 0).unwrap();

        let late = Match::new(stage.clone(), "Late".to_string(), "Gym".to_string())
            .with_status(MatchStatus::Finished)
            .with_scheduled_at(at(18));
        let early = Match::new(stage.clone(), "Early".to_string(), "Gym".to_string())
            .with_scheduled_at(at(9));
        let tba = Match::new(stage.clone(), "TBA".to_string(), "Gym".to_string());
        let other = Match::new("stage-2".into(), "Other".to_string(), "Gym".to_string());

        LeagueData {
            schools: vec![School {
                id: "usc".into(),
                name: "University of San Carlos".to_string(),
                abbreviation: "USC".to_string(),
                logo_url: Some("https://cdn.example.com/usc.png".to_string()),
            }],
            school_teams: vec![SchoolTeam {
                id: "usc-warriors".into(),
                name: "Warriors".to_string(),
                school_id: "usc".into(),
            }],
            match_participants: vec![
                MatchParticipant {
                    match_id: late.id.clone(),
                    team_id: "usc-warriors".into(),
                    match_score: Some(70),
                },
                MatchParticipant {
                    match_id: late.id.clone(),
                    team_id: "ghost".into(),
                    match_score: None,
                },
            ],
            matches: vec![tba, late, other, early],
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_sorted_with_unscheduled_last() {
        let names: Vec<String> = data()
            .matches_for(&"stage-1".into(), MatchQuery::all())
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Early", "Late", "TBA"]);
    }

    #[test]
    fn test_status_filter() {
        let finished = data().matches_for(&"stage-1".into(), MatchQuery::finished());
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].name, "Late");
    }

    #[test]
    fn test_participants_are_joined_to_schools() {
        let finished = data().matches_for(&"stage-1".into(), MatchQuery::finished());
        let p = &finished[0].participants;
        assert_eq!(p.len(), 2);
        assert_eq!(p[0].team_name, "Warriors");
        assert_eq!(p[0].school_abbreviation, "USC");
        assert_eq!(p[0].match_score, Some(70));

        // Unknown teams keep their slot with the id as display name.
        assert_eq!(p[1].team_name, "ghost");
        assert_eq!(p[1].school_name, "");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        let original = data();

        let written = original.save(&config).unwrap();
        assert_eq!(written, 8);

        let loaded = LeagueData::load(&config).unwrap();
        assert_eq!(loaded.matches.len(), 4);
        assert_eq!(
            loaded.matches_for(&"stage-1".into(), MatchQuery::all()),
            original.matches_for(&"stage-1".into(), MatchQuery::all())
        );
    }

    #[test]
    fn test_load_from_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        let loaded = LeagueData::load(&config).unwrap();
        assert!(loaded.matches.is_empty());
        assert!(loaded.stages.is_empty());
    }
}
