//! Team scoring: fantavoto total, defense modifier, and goals.

use serde::Serialize;

use crate::cli::types::Role;

use super::lineup::Lineup;

#[cfg(test)]
mod tests;

/// Point total worth the first goal.
const GOAL_THRESHOLD_BASE: f64 = 66.0;
/// Further points per additional goal.
const GOAL_THRESHOLD_STEP: f64 = 6.0;
/// Defenders the modifier table presumes on the pitch.
const MODIFIER_BACK_LINE: usize = 4;

/// A team's computed result for one matchday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamScore {
    /// Sum of the eleven starters' fantavoti.
    pub base: f64,
    /// Bonus from the defenders' average fantavoto.
    pub defense_modifier: f64,
    /// Final score: base plus defense modifier.
    pub total: f64,
    /// Goals awarded by the threshold table.
    pub goals: u8,
}

/// Score a lineup: fantavoto total, defense modifier, resulting goals.
pub fn score_lineup(lineup: &Lineup) -> TeamScore {
    let base = lineup.total_fantavoto();

    let defenders: Vec<f64> = lineup
        .by_role(Role::Defender)
        .map(|s| s.fantavoto)
        .collect();
    // The modifier table presumes the 4-3-3 back line; any other shape
    // contributes nothing.
    let defense_modifier = if defenders.len() == MODIFIER_BACK_LINE {
        let average = defenders.iter().sum::<f64>() / MODIFIER_BACK_LINE as f64;
        defense_modifier(average)
    } else {
        0.0
    };

    let total = base + defense_modifier;
    TeamScore {
        base,
        defense_modifier,
        total,
        goals: goals_for_score(total),
    }
}

/// Defense modifier for the mean fantavoto of the four defenders.
///
/// Each band is closed below and open above, so an average of exactly 6.0
/// already earns the +2 step.
pub fn defense_modifier(average: f64) -> f64 {
    match average {
        a if a < 6.0 => 1.0,
        a if a < 6.25 => 2.0,
        a if a < 6.5 => 3.0,
        a if a < 6.75 => 4.0,
        a if a < 7.0 => 5.0,
        a if a < 7.25 => 6.0,
        _ => 7.0,
    }
}

/// Convert a point total into goals.
///
/// The first goal arrives at 66 points, each further goal 6 points later
/// (66, 72, 78, ...); anything below 66 is goalless.
///
/// # Examples
///
/// ```
/// use fantacalcio_sim::engine::goals_for_score;
///
/// assert_eq!(goals_for_score(65.5), 0);
/// assert_eq!(goals_for_score(66.0), 1);
/// assert_eq!(goals_for_score(72.0), 2);
/// ```
pub fn goals_for_score(total: f64) -> u8 {
    if total < GOAL_THRESHOLD_BASE {
        return 0;
    }
    let extra = ((total - GOAL_THRESHOLD_BASE) / GOAL_THRESHOLD_STEP).floor();
    1 + extra.min(f64::from(u8::MAX - 1)) as u8
}
