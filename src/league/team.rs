//! Fantasy teams, roster shapes, and roster validation.

use std::fmt;

use tracing::warn;

use crate::cli::types::Role;
use crate::error::{FantaError, Result};

use super::types::Player;


/// Per-role player counts, used both for roster shapes and for the starting
/// formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCounts {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl RoleCounts {
    /// The fixed 4-3-3 starting shape.
    pub const FORMATION_433: RoleCounts = RoleCounts {
        goalkeepers: 1,
        defenders: 4,
        midfielders: 3,
        forwards: 3,
    };

    /// The classic 25-man fantacalcio roster: 3 goalkeepers, 8 defenders,
    /// 8 midfielders, 6 forwards.
    pub const CLASSIC_ROSTER: RoleCounts = RoleCounts {
        goalkeepers: 3,
        defenders: 8,
        midfielders: 8,
        forwards: 6,
    };

    /// The count for one role.
    pub fn get(&self, role: Role) -> usize {
        match role {
            Role::Goalkeeper => self.goalkeepers,
            Role::Defender => self.defenders,
            Role::Midfielder => self.midfielders,
            Role::Forward => self.forwards,
        }
    }

    /// Total players across all roles.
    ///
    /// # Examples
    ///
    /// ```
    /// use fantacalcio_sim::league::RoleCounts;
    ///
    /// assert_eq!(RoleCounts::FORMATION_433.total(), 11);
    /// assert_eq!(RoleCounts::CLASSIC_ROSTER.total(), 25);
    /// ```
    pub fn total(&self) -> usize {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }
}

impl fmt::Display for RoleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}P-{}D-{}C-{}A",
            self.goalkeepers, self.defenders, self.midfielders, self.forwards
        )
    }
}

/// A fantasy team: a display name and the players it owns for the season.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The team's players in one role, in roster order.
    pub fn players_in_role(&self, role: Role) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.role == role)
    }

    /// How many players the team owns per role.
    pub fn role_counts(&self) -> RoleCounts {
        let count = |role| self.players_in_role(role).count();
        RoleCounts {
            goalkeepers: count(Role::Goalkeeper),
            defenders: count(Role::Defender),
            midfielders: count(Role::Midfielder),
            forwards: count(Role::Forward),
        }
    }

    /// Check the roster against the starting formation and the expected shape.
    ///
    /// A role with fewer players than the formation needs can never field a
    /// legal lineup, so that is an error. Deviating from the expected roster
    /// shape (extra or missing bench depth) only logs a warning.
    pub fn validate_roster(&self, expected: &RoleCounts, formation: &RoleCounts) -> Result<()> {
        let counts = self.role_counts();

        for role in Role::ALL {
            let have = counts.get(role);
            let need = formation.get(role);
            if have < need {
                return Err(FantaError::Roster {
                    team: self.name.clone(),
                    message: format!(
                        "{have} {}(s) rostered, formation needs {need}",
                        role.label().to_lowercase()
                    ),
                });
            }
        }

        if counts != *expected {
            warn!(
                team = %self.name,
                shape = %counts,
                expected = %expected,
                "roster deviates from the expected shape"
            );
        }

        Ok(())
    }
}
