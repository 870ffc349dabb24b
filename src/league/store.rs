//! In-memory store of every player seen in the season's matchday data.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::cli::types::{Matchday, PlayerCode};
use crate::error::{FantaError, Result};

use super::types::{Player, StatRecord};

#[cfg(test)]
mod tests;

/// Accumulates matchday stat records into per-player histories.
///
/// Players are created the first time their code appears; every later record
/// must agree on the role. Lookups are by player code.
#[derive(Debug, Default)]
pub struct RecordStore {
    players: BTreeMap<PlayerCode, Player>,
    matchdays: BTreeSet<Matchday>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one matchday's stat records.
    ///
    /// Returns [`FantaError::RoleConflict`] when a known code reappears under
    /// a different role; the store is not rolled back in that case.
    pub fn ingest_matchday(
        &mut self,
        matchday: Matchday,
        records: Vec<StatRecord>,
    ) -> Result<()> {
        let rows = records.len();
        for record in records {
            let player = self.players.entry(record.code).or_insert_with(|| {
                Player::new(record.code, record.role, record.name, record.club)
            });
            if player.role != record.role {
                return Err(FantaError::RoleConflict {
                    code: record.code.as_u32(),
                    first: player.role.to_string(),
                    second: record.role.to_string(),
                });
            }
            player.record_matchday(matchday, record.stats);
        }
        self.matchdays.insert(matchday);
        debug!(matchday = %matchday, rows, "ingested matchday records");
        Ok(())
    }

    /// Look up a player by code.
    pub fn get(&self, code: PlayerCode) -> Option<&Player> {
        self.players.get(&code)
    }

    /// Every known player, in code order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// How many distinct matchdays have been ingested.
    pub fn matchday_count(&self) -> usize {
        self.matchdays.len()
    }

    /// The highest matchday number with any data.
    pub fn last_matchday(&self) -> Option<Matchday> {
        self.matchdays.iter().next_back().copied()
    }

    /// Whether any data was ingested for `matchday`.
    pub fn has_matchday(&self, matchday: Matchday) -> bool {
        self.matchdays.contains(&matchday)
    }
}
