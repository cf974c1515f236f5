//! Match and participant models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, MatchId, StageId, TeamId};

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Upcoming,
    Ongoing,
    Finished,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Finished => "finished",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "ongoing" => Ok(MatchStatus::Ongoing),
            "finished" => Ok(MatchStatus::Finished),
            "cancelled" => Ok(MatchStatus::Cancelled),
            other => Err(format!("unknown match status '{}'", other)),
        }
    }
}

fn default_best_of() -> u32 {
    1
}

/// A scheduled match within a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,

    pub name: String,

    pub status: MatchStatus,

    /// None while the schedule is still to be announced
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,

    pub venue: String,

    pub stage_id: StageId,

    #[serde(default = "default_best_of")]
    pub best_of: u32,
}

impl Match {
    /// Create an upcoming match with an id derived from stage, name and venue.
    pub fn new(stage_id: StageId, name: String, venue: String) -> Self {
        let id = EntityId::generate(&[stage_id.as_str(), &name, &venue]);
        Self {
            id,
            name,
            status: MatchStatus::Upcoming,
            scheduled_at: None,
            venue,
            stage_id,
            best_of: default_best_of(),
        }
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    pub fn with_best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }
}

/// A team's entry in a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub match_id: MatchId,
    pub team_id: TeamId,
    #[serde(default)]
    pub match_score: Option<i64>,
}

/// A participant resolved with the team and school display fields the
/// standings engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantForStandings {
    pub team_id: TeamId,
    pub team_name: String,
    pub school_name: String,
    pub school_abbreviation: String,
    pub school_logo_url: Option<String>,
    pub match_score: Option<i64>,
}

/// A match with its resolved participants, as consumed by the engine.
/// Participant order is storage order; nothing else about storage leaks in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchForStandings {
    pub id: MatchId,
    pub name: String,
    pub status: MatchStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub venue: String,
    pub best_of: u32,
    pub participants: Vec<ParticipantForStandings>,
}

impl MatchForStandings {
    pub fn from_match(m: &Match, participants: Vec<ParticipantForStandings>) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            status: m.status,
            scheduled_at: m.scheduled_at,
            venue: m.venue.clone(),
            best_of: m.best_of,
            participants,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}
