//! Bracket layout for knockout stages (play-ins, playoffs, finals).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{
    BracketMatch, BracketStandings, BracketTeam, CompetitionStageKind, MatchForStandings,
    MatchStatus, SportsSeasonStage,
};

/// Winner of a match, if one can be called.
///
/// Requires a finished match where both sides have a score and the scores
/// differ. Level scores leave the slot undecided.
pub fn resolve_winner(
    status: MatchStatus,
    team1: Option<&BracketTeam>,
    team2: Option<&BracketTeam>,
) -> Option<BracketTeam> {
    if status != MatchStatus::Finished {
        return None;
    }
    let (t1, t2) = (team1?, team2?);
    match t1.score?.cmp(&t2.score?) {
        Ordering::Greater => Some(t1.clone()),
        Ordering::Less => Some(t2.clone()),
        Ordering::Equal => None,
    }
}

/// Lay matches out as bracket slots in the order given.
///
/// Slot `i` lands in round `i / 2 + 1` at position `i`. Matches are expected
/// to arrive in bracket order already; nothing here derives the tree from
/// a team count.
pub fn build_bracket(matches: &[MatchForStandings]) -> Vec<BracketMatch> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let team1 = m.participants.first().map(BracketTeam::from);
            let team2 = m.participants.get(1).map(BracketTeam::from);
            let winner = resolve_winner(m.status, team1.as_ref(), team2.as_ref());

            BracketMatch {
                match_id: m.id.clone(),
                match_name: m.name.clone(),
                match_status: m.status,
                scheduled_at: m.scheduled_at,
                venue: m.venue.clone(),
                best_of: m.best_of,
                team1,
                team2,
                winner,
                round: i as u32 / 2 + 1,
                position: i as u32,
            }
        })
        .collect()
}

pub fn bracket_standings(
    stage: &SportsSeasonStage,
    kind: CompetitionStageKind,
    bracket: Vec<BracketMatch>,
) -> BracketStandings {
    BracketStandings {
        stage_id: stage.id.clone(),
        stage_name: stage.stage_name.clone(),
        competition_stage: kind,
        bracket,
    }
}

/// Display label for a round holding `match_count` matches.
pub fn round_label(round: u32, match_count: usize) -> String {
    match match_count {
        1 => "Championship Final".to_string(),
        2 => "Semifinals".to_string(),
        4 => "Quarterfinals".to_string(),
        n if n > 4 && n.is_power_of_two() => format!("Round of {}", n * 2),
        _ => format!("Round {}", round),
    }
}

/// Labels for every round present in a bracket. Display only.
pub fn round_labels(bracket: &[BracketMatch]) -> BTreeMap<u32, String> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for m in bracket {
        *counts.entry(m.round).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(round, count)| (round, round_label(round, count)))
        .collect()
}
