//! Starting-eleven selection under the fixed 4-3-3 formation.

use serde::Serialize;

use crate::cli::types::{Matchday, PlayerCode, Role};
use crate::error::{FantaError, Result};
use crate::league::{RoleCounts, Team};

use super::fantavoto::player_fantavoto;

#[cfg(test)]
mod tests;

/// One selected starter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub code: PlayerCode,
    pub name: String,
    pub role: Role,
    /// The starter's fantavoto for the matchday (`0.0` for unrated fillers).
    pub fantavoto: f64,
    /// `false` when the slot had to be filled by an unrated player.
    pub rated: bool,
}

/// A team's starting eleven for one matchday, grouped by role in
/// goalkeeper-defender-midfielder-forward order.
#[derive(Debug, Clone, Serialize)]
pub struct Lineup {
    pub matchday: Matchday,
    pub starters: Vec<Selection>,
}

impl Lineup {
    /// Sum of all eleven starters' fantavoti.
    pub fn total_fantavoto(&self) -> f64 {
        self.starters.iter().map(|s| s.fantavoto).sum()
    }

    /// The starters selected in one role, best first.
    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Selection> {
        self.starters.iter().filter(move |s| s.role == role)
    }

    /// How many starters went in without a published vote.
    pub fn unrated_count(&self) -> usize {
        self.starters.iter().filter(|s| !s.rated).count()
    }
}

/// Select a team's best 4-3-3 lineup for one matchday.
///
/// Per role, rated players rank by fantavoto descending with the lower player
/// code breaking ties; when rated players run out, unrated roster players
/// fill the remaining slots in ascending code order with a zero vote. A
/// roster that cannot fill a role at all is a configuration error.
pub fn select_lineup(team: &Team, matchday: Matchday) -> Result<Lineup> {
    let formation = RoleCounts::FORMATION_433;
    let mut starters = Vec::with_capacity(formation.total());

    for role in Role::ALL {
        let slots = formation.get(role);
        let mut candidates: Vec<Selection> = team
            .players_in_role(role)
            .map(|player| Selection {
                code: player.code,
                name: player.name.clone(),
                role,
                fantavoto: player_fantavoto(player, matchday),
                rated: player.is_rated(matchday),
            })
            .collect();

        if candidates.len() < slots {
            return Err(FantaError::Roster {
                team: team.name().to_string(),
                message: format!(
                    "{} {}(s) available on matchday {matchday}, lineup needs {slots}",
                    candidates.len(),
                    role.label().to_lowercase()
                ),
            });
        }

        // Rated starters come first even on a negative fantavoto; unrated
        // fillers sort behind them by code.
        candidates.sort_by(|a, b| {
            b.rated
                .cmp(&a.rated)
                .then(b.fantavoto.total_cmp(&a.fantavoto))
                .then(a.code.cmp(&b.code))
        });
        starters.extend(candidates.into_iter().take(slots));
    }

    Ok(Lineup { matchday, starters })
}
