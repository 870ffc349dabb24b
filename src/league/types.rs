//! Core domain types: matchday statistics and the players that carry them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::types::{Matchday, PlayerCode, Role};

#[cfg(test)]
mod tests;

/// One player's recorded statistics for a single matchday.
///
/// `rating: None` marks an unrated appearance (did not play, or no vote was
/// published). Unrated players score exactly zero no matter what else the
/// row records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchdayStats {
    /// Base newspaper rating, `None` when the player was not rated.
    pub rating: Option<f64>,
    pub goals_scored: u8,
    /// Goals conceded while on the pitch (meaningful for goalkeepers).
    pub goals_conceded: u8,
    pub penalties_scored: u8,
    pub penalties_saved: u8,
    pub penalties_missed: u8,
    pub own_goals: u8,
    pub assists: u8,
    pub yellow_card: bool,
    pub red_card: bool,
    /// Derived at load time: rated goalkeeper with zero goals conceded.
    pub clean_sheet: bool,
}

impl MatchdayStats {
    /// Stats for a player with no published vote: no rating, no events.
    ///
    /// # Examples
    ///
    /// ```
    /// use fantacalcio_sim::league::MatchdayStats;
    ///
    /// let stats = MatchdayStats::unrated();
    /// assert!(stats.rating.is_none());
    /// assert_eq!(stats.goals_scored, 0);
    /// ```
    pub fn unrated() -> Self {
        Self::default()
    }

    /// Whether a vote was published for this appearance.
    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }
}

/// One row of tabular matchday input: player identity plus that day's stats.
#[derive(Debug, Clone)]
pub struct StatRecord {
    pub code: PlayerCode,
    pub role: Role,
    pub name: String,
    /// Real-world club the player belongs to (informational only).
    pub club: String,
    pub stats: MatchdayStats,
}

/// A player identified by code, with every matchday record seen so far.
///
/// Records are append-only: the first record for a matchday wins and later
/// duplicates are dropped with a warning.
#[derive(Debug, Clone)]
pub struct Player {
    pub code: PlayerCode,
    pub name: String,
    pub role: Role,
    pub club: String,
    stats: BTreeMap<Matchday, MatchdayStats>,
}

impl Player {
    /// Create a player with no recorded matchdays yet.
    pub fn new(
        code: PlayerCode,
        role: Role,
        name: impl Into<String>,
        club: impl Into<String>,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            role,
            club: club.into(),
            stats: BTreeMap::new(),
        }
    }

    /// Record this player's statistics for one matchday.
    ///
    /// A second record for the same matchday is ignored and logged.
    pub fn record_matchday(&mut self, matchday: Matchday, stats: MatchdayStats) {
        use std::collections::btree_map::Entry;

        match self.stats.entry(matchday) {
            Entry::Vacant(entry) => {
                entry.insert(stats);
            }
            Entry::Occupied(_) => {
                warn!(
                    code = %self.code,
                    name = %self.name,
                    matchday = %matchday,
                    "duplicate matchday record ignored"
                );
            }
        }
    }

    /// The recorded statistics for `matchday`, if any.
    pub fn stats_for(&self, matchday: Matchday) -> Option<&MatchdayStats> {
        self.stats.get(&matchday)
    }

    /// Whether the player has a published vote for `matchday`.
    ///
    /// A missing record counts the same as an unrated one.
    pub fn is_rated(&self, matchday: Matchday) -> bool {
        self.stats_for(matchday).is_some_and(MatchdayStats::is_rated)
    }

    /// How many matchdays have a record for this player.
    pub fn matchdays_recorded(&self) -> usize {
        self.stats.len()
    }
}
