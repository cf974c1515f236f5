//! Standings calculation engine.
//!
//! Pure functions over a snapshot of match data:
//! - Folding finished matches into per-team records
//! - Ranking records into a table
//! - Laying out knockout matches as a bracket
//!
//! Nothing here touches storage or keeps state between calls.

mod aggregate;
mod bracket;
mod ranking;

pub use aggregate::aggregate_results;
pub use bracket::{bracket_standings, build_bracket, resolve_winner, round_label, round_labels};
pub use ranking::{compare_entries, group_stage_standings, rank_standings};
