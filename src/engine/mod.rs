//! The simulation core: scoring, selection, scheduling, and standings.

pub mod fantavoto;
pub mod lineup;
pub mod schedule;
pub mod score;
pub mod season;
pub mod standings;

pub use fantavoto::{fantavoto, player_fantavoto};
pub use lineup::{select_lineup, Lineup, Selection};
pub use schedule::{generate_fixtures, Fixtures, Pairing};
pub use score::{defense_modifier, goals_for_score, score_lineup, TeamScore};
pub use season::{play_match, run_season, MatchLogEntry, SeasonConfig, SeasonReport};
pub use standings::{MatchResult, Outcome, Standings, StandingsRow};
