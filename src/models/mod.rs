//! Core data models for league standings.

mod game_match;
mod ids;
mod league;
mod stage;
mod standings;

pub use game_match::*;
pub use ids::*;
pub use league::*;
pub use stage::*;
pub use standings::*;
