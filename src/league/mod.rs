//! Domain model: players, matchday statistics, teams, and the record store.

pub mod store;
pub mod team;
pub mod types;

pub use store::RecordStore;
pub use team::{RoleCounts, Team};
pub use types::{MatchdayStats, Player, StatRecord};
