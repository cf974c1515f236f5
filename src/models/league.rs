//! League reference data: seasons, sports, categories, schools and teams.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SchoolId, SeasonId, SportCategoryId, SportId, TeamId};

/// A league season, e.g. 2025-2026.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: SeasonId,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Season {
    /// Display name in `{startYear}-{endYear}` form.
    pub fn display_name(&self) -> String {
        format!("{}-{}", self.start_at.year(), self.end_at.year())
    }
}

/// A sport contested in the league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sport {
    pub id: SportId,
    pub name: String,
}

/// Competition division of a sport category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Men,
    Women,
    Mixed,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::Men => write!(f, "Men's"),
            Division::Women => write!(f, "Women's"),
            Division::Mixed => write!(f, "Mixed"),
        }
    }
}

/// School level of a sport category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Elementary,
    HighSchool,
    College,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Elementary => write!(f, "Elementary"),
            Level::HighSchool => write!(f, "High School"),
            Level::College => write!(f, "College"),
        }
    }
}

/// A sport category: one division/level pairing of a sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportCategory {
    pub id: SportCategoryId,
    pub sport_id: SportId,
    pub division: Division,
    pub levels: Level,
}

impl SportCategory {
    /// Human-cased name such as "Men's College".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.division, self.levels)
    }
}

/// A member school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A school's team entered in a sport category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolTeam {
    pub id: TeamId,
    pub name: String,
    pub school_id: SchoolId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_season_display_name() {
        let season = Season {
            id: "1".into(),
            start_at: Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2026, 5, 31, 0, 0, 0).unwrap(),
        };
        assert_eq!(season.display_name(), "2025-2026");
    }

    #[test]
    fn test_category_display_names() {
        let mut category = SportCategory {
            id: "c1".into(),
            sport_id: "s1".into(),
            division: Division::Men,
            levels: Level::College,
        };
        assert_eq!(category.display_name(), "Men's College");

        category.division = Division::Women;
        category.levels = Level::HighSchool;
        assert_eq!(category.display_name(), "Women's High School");

        category.division = Division::Mixed;
        category.levels = Level::Elementary;
        assert_eq!(category.display_name(), "Mixed Elementary");
    }

    #[test]
    fn test_category_deserializes_snake_case() {
        let json = r#"{"id":"c1","sport_id":"s1","division":"women","levels":"high_school"}"#;
        let category: SportCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.division, Division::Women);
        assert_eq!(category.levels, Level::HighSchool);
    }
}
