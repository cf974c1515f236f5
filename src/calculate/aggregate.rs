//! Folding match results into per-team records.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{MatchForStandings, StandingsEntry, TeamId};

/// Aggregate finished matches into one entry per team.
///
/// Entries come back in the order teams were first seen. Every team that
/// appears in any supplied match gets an entry, but only finished matches
/// with exactly two participants change stats; a missing score counts as 0.
pub fn aggregate_results(matches: &[MatchForStandings]) -> Vec<StandingsEntry> {
    let mut entries: Vec<StandingsEntry> = Vec::new();
    let mut index: HashMap<TeamId, usize> = HashMap::new();

    for m in matches {
        for participant in &m.participants {
            if !index.contains_key(&participant.team_id) {
                index.insert(participant.team_id.clone(), entries.len());
                entries.push(StandingsEntry::new(participant));
            }
        }
    }

    for m in matches {
        let (home, away) = match m.participants.as_slice() {
            [home, away] => (home, away),
            other => {
                debug!(
                    "Skipping match {} with {} participant(s)",
                    m.id,
                    other.len()
                );
                continue;
            }
        };

        if !m.is_finished() {
            debug!("Skipping match {} with status {}", m.id, m.status);
            continue;
        }

        let home_score = home.match_score.unwrap_or(0);
        let away_score = away.match_score.unwrap_or(0);

        entries[index[&home.team_id]].record(home_score, away_score);
        entries[index[&away.team_id]].record(away_score, home_score);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::test_support::{finished, participant, with_status};
    use crate::models::{MatchStatus, POINTS_DRAW, POINTS_WIN};

    fn entry<'a>(entries: &'a [StandingsEntry], team: &str) -> &'a StandingsEntry {
        entries
            .iter()
            .find(|e| e.team_id.as_str() == team)
            .unwrap()
    }

    #[test]
    fn test_round_robin_scenario() {
        let matches = vec![
            finished("m1", vec![participant("x", Some(2)), participant("y", Some(1))]),
            finished("m2", vec![participant("y", Some(1)), participant("z", Some(0))]),
            finished("m3", vec![participant("x", Some(1)), participant("z", Some(1))]),
        ];

        let entries = aggregate_results(&matches);
        assert_eq!(entries.len(), 3);

        let x = entry(&entries, "x");
        assert_eq!((x.points, x.wins, x.draws, x.losses), (4, 1, 1, 0));
        assert_eq!((x.goals_for, x.goals_against), (3, 2));

        let y = entry(&entries, "y");
        assert_eq!((y.points, y.wins, y.draws, y.losses), (3, 1, 0, 1));
        assert_eq!((y.goals_for, y.goals_against), (2, 2));

        let z = entry(&entries, "z");
        assert_eq!((z.points, z.wins, z.draws, z.losses), (1, 0, 1, 1));
        assert_eq!((z.goals_for, z.goals_against), (1, 2));
    }

    #[test]
    fn test_huge_scores_do_not_overflow() {
        let matches = vec![
            finished("m1", vec![participant("a", Some(i64::MAX)), participant("b", Some(0))]),
            finished("m2", vec![participant("a", Some(1)), participant("c", Some(0))]),
        ];

        let entries = aggregate_results(&matches);
        let a = entry(&entries, "a");
        assert_eq!(a.goals_for, i64::MAX);
        assert_eq!(a.goal_difference, i64::MAX);
        assert_eq!(a.points, 2 * POINTS_WIN);
    }

    #[test]
    fn test_missing_score_counts_as_zero() {
        let matches = vec![finished(
            "m1",
            vec![participant("a", Some(2)), participant("b", None)],
        )];

        let entries = aggregate_results(&matches);
        let a = entry(&entries, "a");
        assert_eq!((a.goals_for, a.goals_against), (2, 0));
        assert_eq!(a.points, POINTS_WIN);

        let b = entry(&entries, "b");
        assert_eq!((b.goals_for, b.goals_against), (0, 2));
        assert_eq!(b.losses, 1);
    }

    #[test]
    fn test_both_scores_missing_is_a_draw() {
        let matches = vec![finished(
            "m1",
            vec![participant("a", None), participant("b", None)],
        )];

        let entries = aggregate_results(&matches);
        assert!(entries.iter().all(|e| e.draws == 1 && e.points == POINTS_DRAW));
    }

    #[test]
    fn test_malformed_matches_are_skipped() {
        let matches = vec![
            finished("m1", vec![participant("a", Some(5))]),
            finished("m2", Vec::new()),
            finished(
                "m3",
                vec![
                    participant("a", Some(1)),
                    participant("b", Some(0)),
                    participant("c", Some(0)),
                ],
            ),
            finished("m4", vec![participant("a", Some(1)), participant("b", Some(0))]),
        ];

        let entries = aggregate_results(&matches);

        // Teams from skipped matches still get a zeroed row.
        assert_eq!(entries.len(), 3);
        let a = entry(&entries, "a");
        assert_eq!(a.matches_played, 1);
        assert_eq!(a.goals_for, 1);
        let c = entry(&entries, "c");
        assert_eq!(c.matches_played, 0);
        assert_eq!(c.points, 0);
    }

    #[test]
    fn test_unfinished_matches_do_not_count() {
        let matches = vec![with_status(
            "m1",
            MatchStatus::Ongoing,
            vec![participant("a", Some(3)), participant("b", Some(0))],
        )];

        let entries = aggregate_results(&matches);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.matches_played == 0));
    }

    #[test]
    fn test_first_seen_order_and_metadata() {
        let mut renamed = participant("a", Some(0));
        renamed.team_name = "Renamed".to_string();
        let matches = vec![
            finished("m1", vec![participant("b", Some(1)), participant("a", Some(0))]),
            finished("m2", vec![renamed, participant("c", Some(0))]),
        ];

        let entries = aggregate_results(&matches);
        let ids: Vec<&str> = entries.iter().map(|e| e.team_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(entry(&entries, "a").team_name, "A Team");
    }

    #[test]
    fn test_points_and_goal_difference_invariants() {
        let matches = vec![
            finished("m1", vec![participant("a", Some(4)), participant("b", Some(4))]),
            finished("m2", vec![participant("b", Some(7)), participant("c", Some(2))]),
            finished("m3", vec![participant("c", None), participant("a", Some(1))]),
            finished("m4", vec![participant("a", Some(0)), participant("d", Some(3))]),
        ];

        let entries = aggregate_results(&matches);
        let total_points: u32 = entries.iter().map(|e| e.points).sum();
        let draws: u32 = entries.iter().map(|e| e.draws).sum::<u32>() / 2;
        let decided = matches.len() as u32 - draws;
        assert_eq!(total_points, decided * 3 + draws * 2);

        for e in &entries {
            assert_eq!(e.goal_difference, e.goals_for - e.goals_against);
            assert_eq!(e.matches_played, e.wins + e.losses + e.draws);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_results(&[]).is_empty());
    }
}
