//! Data integrity checks over the league tables.
//!
//! The standings engine tolerates all of these; this report exists so
//! operators can find and fix the rows.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::{EntityType, JsonlReader, LeagueData, StorageConfig, StorageError};
use crate::models::{
    Match, MatchId, MatchParticipant, School, SchoolTeam, Season, Sport, SportCategory,
    SportsSeasonStage, StageId, TeamId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A match without exactly two participants; left out of group tables.
    ParticipantCount { match_id: MatchId, count: usize },
    UnknownTeam { match_id: MatchId, team_id: TeamId },
    UnknownStage { match_id: MatchId, stage_id: StageId },
    /// A stage whose competition tag is not a known kind.
    UnknownStageKind { stage_id: StageId, tag: String },
    MissingTable { path: PathBuf },
    /// A row the lenient loader would skip; only the first per table is reported.
    UnreadableRow {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::ParticipantCount { match_id, count } => {
                write!(f, "match {} has {} participant(s), expected 2", match_id, count)
            }
            IntegrityIssue::UnknownTeam { match_id, team_id } => {
                write!(f, "match {} references unknown team {}", match_id, team_id)
            }
            IntegrityIssue::UnknownStage { match_id, stage_id } => {
                write!(f, "match {} references unknown stage {}", match_id, stage_id)
            }
            IntegrityIssue::UnknownStageKind { stage_id, tag } => {
                write!(f, "stage {} has unknown competition stage '{}'", stage_id, tag)
            }
            IntegrityIssue::MissingTable { path } => write!(f, "table {:?} is missing", path),
            IntegrityIssue::UnreadableRow {
                path,
                line,
                message,
            } => write!(f, "{:?} line {} is unreadable: {}", path, line, message),
        }
    }
}

/// Parse every table strictly and report missing tables and bad rows.
///
/// I/O failures other than a missing file are returned as errors.
pub fn check_tables(config: &StorageConfig) -> Result<Vec<IntegrityIssue>, StorageError> {
    let mut issues = Vec::new();

    for entity in EntityType::ALL {
        let result = match entity {
            EntityType::Season => strict_count::<Season>(config, entity),
            EntityType::Sport => strict_count::<Sport>(config, entity),
            EntityType::SportCategory => strict_count::<SportCategory>(config, entity),
            EntityType::School => strict_count::<School>(config, entity),
            EntityType::SchoolTeam => strict_count::<SchoolTeam>(config, entity),
            EntityType::Stage => strict_count::<SportsSeasonStage>(config, entity),
            EntityType::Match => strict_count::<Match>(config, entity),
            EntityType::MatchParticipant => strict_count::<MatchParticipant>(config, entity),
        };

        match result {
            Ok(_) => {}
            Err(StorageError::PathNotFound(path)) => {
                issues.push(IntegrityIssue::MissingTable { path })
            }
            Err(StorageError::InvalidRow { path, line, source }) => {
                issues.push(IntegrityIssue::UnreadableRow {
                    path,
                    line,
                    message: source.to_string(),
                })
            }
            Err(e) => return Err(e),
        }
    }

    Ok(issues)
}

fn strict_count<T: DeserializeOwned>(
    config: &StorageConfig,
    entity: EntityType,
) -> Result<usize, StorageError> {
    JsonlReader::<T>::for_entity(config, entity)
        .read_strict()
        .map(|rows| rows.len())
}

/// Collect every integrity issue in the snapshot.
pub fn validate(data: &LeagueData) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for stage in &data.stages {
        if stage.kind().is_err() {
            issues.push(IntegrityIssue::UnknownStageKind {
                stage_id: stage.id.clone(),
                tag: stage.competition_stage.clone(),
            });
        }
    }

    let team_ids: HashSet<&TeamId> = data.school_teams.iter().map(|t| &t.id).collect();

    for m in &data.matches {
        if data.stage(&m.stage_id).is_none() {
            issues.push(IntegrityIssue::UnknownStage {
                match_id: m.id.clone(),
                stage_id: m.stage_id.clone(),
            });
        }

        let participants: Vec<_> = data
            .match_participants
            .iter()
            .filter(|p| p.match_id == m.id)
            .collect();

        if participants.len() != 2 {
            issues.push(IntegrityIssue::ParticipantCount {
                match_id: m.id.clone(),
                count: participants.len(),
            });
        }

        for p in participants {
            if !team_ids.contains(&p.team_id) {
                issues.push(IntegrityIssue::UnknownTeam {
                    match_id: m.id.clone(),
                    team_id: p.team_id.clone(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::demo_data;
    use tempfile::TempDir;

    #[test]
    fn test_demo_data_is_clean() {
        assert!(validate(&demo_data()).is_empty());
    }

    #[test]
    fn test_reports_every_issue_kind() {
        let mut data = demo_data();
        data.stages[0].competition_stage = "knockout".to_string();

        let lonely = Match::new("bb-mc-group".into(), "Lonely".to_string(), "Gym".to_string());
        data.match_participants.push(MatchParticipant {
            match_id: lonely.id.clone(),
            team_id: "nobody".into(),
            match_score: Some(1),
        });
        data.matches.push(lonely.clone());

        let orphan = Match::new("missing-stage".into(), "Orphan".to_string(), "Gym".to_string());
        for team in ["usc-mbb", "uc-mbb"] {
            data.match_participants.push(MatchParticipant {
                match_id: orphan.id.clone(),
                team_id: team.into(),
                match_score: None,
            });
        }
        data.matches.push(orphan.clone());

        let issues = validate(&data);
        assert_eq!(issues.len(), 4);
        assert!(issues.contains(&IntegrityIssue::UnknownStageKind {
            stage_id: "bb-mc-finals".into(),
            tag: "knockout".to_string(),
        }));
        assert!(issues.contains(&IntegrityIssue::ParticipantCount {
            match_id: lonely.id.clone(),
            count: 1,
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownTeam {
            match_id: lonely.id.clone(),
            team_id: "nobody".into(),
        }));
        assert!(issues.contains(&IntegrityIssue::UnknownStage {
            match_id: orphan.id.clone(),
            stage_id: "missing-stage".into(),
        }));
    }

    #[test]
    fn test_issue_display() {
        let issue = IntegrityIssue::ParticipantCount {
            match_id: "m1".into(),
            count: 3,
        };
        assert_eq!(issue.to_string(), "match m1 has 3 participant(s), expected 2");
    }

    #[test]
    fn test_saved_demo_tables_parse_strictly() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        demo_data().save(&config).unwrap();

        assert!(check_tables(&config).unwrap().is_empty());
    }

    #[test]
    fn test_bad_rows_and_missing_tables_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        demo_data().save(&config).unwrap();

        std::fs::remove_file(config.entity_path(EntityType::School)).unwrap();
        let matches_path = config.entity_path(EntityType::Match);
        let mut contents = std::fs::read_to_string(&matches_path).unwrap();
        contents.push_str("{\"id\": \"broken\"}\n");
        std::fs::write(&matches_path, contents).unwrap();

        let issues = check_tables(&config).unwrap();
        assert_eq!(issues.len(), 2);
        assert!(issues.contains(&IntegrityIssue::MissingTable {
            path: config.entity_path(EntityType::School),
        }));
        match &issues[1] {
            IntegrityIssue::UnreadableRow { path, line, .. } => {
                assert_eq!(path, &matches_path);
                assert_eq!(*line, 10);
            }
            other => panic!("expected UnreadableRow, got {:?}", other),
        }
    }
}
