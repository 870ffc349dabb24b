//! Round-robin fixture generation.

use crate::cli::types::Matchday;
use crate::error::{FantaError, Result};


/// One fixture, as indices into the season's team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub home: usize,
    pub away: usize,
}

/// The season's full fixture list: one set of pairings per matchday, with
/// every team playing exactly once per matchday.
#[derive(Debug, Clone)]
pub struct Fixtures {
    matchdays: Vec<Vec<Pairing>>,
}

impl Fixtures {
    pub fn matchday_count(&self) -> usize {
        self.matchdays.len()
    }

    /// The pairings scheduled for a 1-based matchday number.
    pub fn pairings_for(&self, matchday: Matchday) -> Option<&[Pairing]> {
        (matchday.as_u8() as usize)
            .checked_sub(1)
            .and_then(|index| self.matchdays.get(index))
            .map(Vec::as_slice)
    }

    /// Iterate all matchdays in order with their 1-based numbers.
    pub fn iter(&self) -> impl Iterator<Item = (Matchday, &[Pairing])> {
        self.matchdays
            .iter()
            .enumerate()
            .map(|(index, pairings)| (Matchday::new(index as u8 + 1), pairings.as_slice()))
    }
}

/// Generate a round-robin schedule for `team_count` teams over `rounds`
/// cycles (2 = classic double round-robin).
///
/// Uses the circle method: team 0 stays fixed while the others rotate one
/// step per matchday, so each cycle of `team_count - 1` matchdays pairs every
/// team with every other exactly once. Odd cycles swap home and away.
pub fn generate_fixtures(team_count: usize, rounds: u8) -> Result<Fixtures> {
    if team_count < 2 {
        return Err(FantaError::Schedule {
            message: format!("a league needs at least 2 teams, got {team_count}"),
        });
    }
    if team_count % 2 != 0 {
        return Err(FantaError::Schedule {
            message: format!("round-robin needs an even number of teams, got {team_count}"),
        });
    }
    if rounds == 0 {
        return Err(FantaError::Schedule {
            message: "a season needs at least 1 round".to_string(),
        });
    }

    let per_cycle = team_count - 1;
    let total = per_cycle * rounds as usize;
    if total > u8::MAX as usize {
        return Err(FantaError::Schedule {
            message: format!(
                "{rounds} round(s) of {team_count} teams is {total} matchdays, more than the supported {}",
                u8::MAX
            ),
        });
    }

    let mut rotation: Vec<usize> = (0..team_count).collect();
    let mut matchdays = Vec::with_capacity(total);

    for cycle in 0..rounds {
        for _ in 0..per_cycle {
            let mut pairings = Vec::with_capacity(team_count / 2);
            for slot in 0..team_count / 2 {
                let a = rotation[slot];
                let b = rotation[team_count - 1 - slot];
                let (home, away) = if cycle % 2 == 0 { (a, b) } else { (b, a) };
                pairings.push(Pairing { home, away });
            }
            matchdays.push(pairings);
            rotation[1..].rotate_right(1);
        }
    }

    Ok(Fixtures { matchdays })
}
