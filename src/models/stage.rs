//! Competition stages within a season's sport category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{SeasonId, SportCategoryId, StageId};

/// Kind of competition a stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionStageKind {
    GroupStage,
    Playins,
    Playoffs,
    Finals,
}

impl CompetitionStageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionStageKind::GroupStage => "group_stage",
            CompetitionStageKind::Playins => "playins",
            CompetitionStageKind::Playoffs => "playoffs",
            CompetitionStageKind::Finals => "finals",
        }
    }
}

impl fmt::Display for CompetitionStageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A competition stage tag that is not one of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStageKind(pub String);

impl fmt::Display for UnknownStageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown competition stage '{}'", self.0)
    }
}

impl std::error::Error for UnknownStageKind {}

impl FromStr for CompetitionStageKind {
    type Err = UnknownStageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group_stage" => Ok(CompetitionStageKind::GroupStage),
            "playins" => Ok(CompetitionStageKind::Playins),
            "playoffs" => Ok(CompetitionStageKind::Playoffs),
            "finals" => Ok(CompetitionStageKind::Finals),
            other => Err(UnknownStageKind(other.to_string())),
        }
    }
}

/// A stage row as stored. The tag is kept raw so an unexpected value
/// surfaces as an error where standings are computed, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportsSeasonStage {
    pub id: StageId,
    pub stage_name: String,
    pub competition_stage: String,
    pub order: i32,
    pub season_id: SeasonId,
    pub sport_category_id: SportCategoryId,
}

impl SportsSeasonStage {
    pub fn kind(&self) -> Result<CompetitionStageKind, UnknownStageKind> {
        self.competition_stage.parse()
    }
}
