//! A small sample league used by `init-demo` and in tests.

use chrono::{DateTime, TimeZone, Utc};

use super::LeagueData;
use crate::models::{
    Division, Level, Match, MatchParticipant, MatchStatus, School, SchoolTeam, Season, Sport,
    SportCategory, SportsSeasonStage, StageId,
};

fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    let year = if month >= 8 { 2025 } else { 2026 };
    // UTC has no gaps, so every fixed date below maps to exactly one instant.
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

struct Fixture {
    stage: &'static str,
    name: &'static str,
    status: MatchStatus,
    scheduled_at: Option<DateTime<Utc>>,
    home: (&'static str, Option<i64>),
    away: (&'static str, Option<i64>),
}

fn played(
    stage: &'static str,
    name: &'static str,
    when: DateTime<Utc>,
    home: (&'static str, i64),
    away: (&'static str, i64),
) -> Fixture {
    Fixture {
        stage,
        name,
        status: MatchStatus::Finished,
        scheduled_at: Some(when),
        home: (home.0, Some(home.1)),
        away: (away.0, Some(away.1)),
    }
}

fn pending(
    stage: &'static str,
    name: &'static str,
    when: Option<DateTime<Utc>>,
    home: &'static str,
    away: &'static str,
) -> Fixture {
    Fixture {
        stage,
        name,
        status: MatchStatus::Upcoming,
        scheduled_at: when,
        home: (home, None),
        away: (away, None),
    }
}

/// One season of men's college basketball: a four-team group stage,
/// semifinals and a final still to be played.
pub fn demo_data() -> LeagueData {
    let schools = [
        ("usc", "University of San Carlos", "USC", "Warriors"),
        ("uc", "University of Cebu", "UC", "Webmasters"),
        ("swu", "Southwestern University PHINMA", "SWU", "Cobras"),
        ("uv", "University of the Visayas", "UV", "Green Lancers"),
    ];

    let stage = |id: &str, name: &str, tag: &str, order: i32| SportsSeasonStage {
        id: id.into(),
        stage_name: name.to_string(),
        competition_stage: tag.to_string(),
        order,
        season_id: "season-2025".into(),
        sport_category_id: "basketball-men-college".into(),
    };

    let fixtures = [
        played("bb-mc-group", "USC vs UC", at(9, 6, 13), ("usc", 78), ("uc", 70)),
        played("bb-mc-group", "SWU vs UV", at(9, 6, 16), ("swu", 65), ("uv", 60)),
        played("bb-mc-group", "USC vs SWU", at(9, 13, 13), ("usc", 80), ("swu", 82)),
        played("bb-mc-group", "UC vs UV", at(9, 13, 16), ("uc", 71), ("uv", 69)),
        played("bb-mc-group", "USC vs UV", at(9, 20, 13), ("usc", 90), ("uv", 66)),
        pending("bb-mc-group", "UC vs SWU", None, "uc", "swu"),
        played("bb-mc-playoffs", "Semifinal 1", at(10, 4, 13), ("usc", 85), ("uc", 80)),
        played("bb-mc-playoffs", "Semifinal 2", at(10, 4, 16), ("swu", 70), ("uv", 72)),
        pending("bb-mc-finals", "Final", Some(at(10, 18, 17)), "usc", "uv"),
    ];

    let mut matches = Vec::new();
    let mut match_participants = Vec::new();
    for f in fixtures {
        let stage_id: StageId = f.stage.into();
        let mut m = Match::new(stage_id, f.name.to_string(), "Cebu Coliseum".to_string())
            .with_status(f.status)
            .with_best_of(1);
        m.scheduled_at = f.scheduled_at;

        for (school, score) in [f.home, f.away] {
            match_participants.push(MatchParticipant {
                match_id: m.id.clone(),
                team_id: format!("{}-mbb", school).into(),
                match_score: score,
            });
        }
        matches.push(m);
    }

    LeagueData {
        seasons: vec![Season {
            id: "season-2025".into(),
            start_at: at(8, 1, 0),
            end_at: at(5, 31, 0),
        }],
        sports: vec![Sport {
            id: "basketball".into(),
            name: "Basketball".to_string(),
        }],
        sport_categories: vec![SportCategory {
            id: "basketball-men-college".into(),
            sport_id: "basketball".into(),
            division: Division::Men,
            levels: Level::College,
        }],
        schools: schools
            .iter()
            .map(|(id, name, abbreviation, _)| School {
                id: (*id).into(),
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
                logo_url: Some(format!("https://cdn.cesafi.org/logos/{}.png", id)),
            })
            .collect(),
        school_teams: schools
            .iter()
            .map(|(id, _, abbreviation, nickname)| SchoolTeam {
                id: format!("{}-mbb", id).into(),
                name: format!("{} {}", abbreviation, nickname),
                school_id: (*id).into(),
            })
            .collect(),
        stages: vec![
            stage("bb-mc-finals", "Finals", "finals", 3),
            stage("bb-mc-group", "Elimination Round", "group_stage", 1),
            stage("bb-mc-playoffs", "Semifinals", "playoffs", 2),
        ],
        matches,
        match_participants,
    }
}
