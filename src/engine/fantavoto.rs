//! Fantavoto computation: one player's fantasy score for one matchday.

use crate::cli::types::{Matchday, Role};
use crate::league::{MatchdayStats, Player};


/// Bonus per goal scored and per penalty converted.
const GOAL_BONUS: f64 = 3.0;
/// Bonus per assist.
const ASSIST_BONUS: f64 = 1.0;
/// Malus per penalty missed.
const PENALTY_MISS_MALUS: f64 = 3.0;
/// Goalkeeper bonus per penalty saved.
const PENALTY_SAVE_BONUS: f64 = 3.0;
/// Malus per own goal.
const OWN_GOAL_MALUS: f64 = 2.0;
/// Malus for a yellow card booking.
const YELLOW_CARD_MALUS: f64 = 0.5;
/// Malus for a red card.
const RED_CARD_MALUS: f64 = 1.0;
/// Goalkeeper malus per goal conceded.
const GOAL_CONCEDED_MALUS: f64 = 1.0;
/// Goalkeeper bonus for keeping a clean sheet.
const CLEAN_SHEET_BONUS: f64 = 1.0;

/// Compute the fantavoto for one matchday's statistics.
///
/// The base newspaper rating is adjusted by fixed bonuses and maluses; the
/// goals-conceded malus, penalty-save bonus, and clean-sheet bonus apply to
/// goalkeepers only. An unrated appearance is worth exactly `0.0` no matter
/// what events the row carries.
///
/// # Examples
///
/// ```
/// use fantacalcio_sim::engine::fantavoto;
/// use fantacalcio_sim::league::MatchdayStats;
/// use fantacalcio_sim::Role;
///
/// let stats = MatchdayStats {
///     rating: Some(7.0),
///     goals_scored: 1,
///     ..MatchdayStats::default()
/// };
/// assert_eq!(fantavoto(&stats, Role::Forward), 10.0);
/// assert_eq!(fantavoto(&MatchdayStats::unrated(), Role::Forward), 0.0);
/// ```
pub fn fantavoto(stats: &MatchdayStats, role: Role) -> f64 {
    let Some(rating) = stats.rating else {
        return 0.0;
    };

    let mut total = rating;
    total += GOAL_BONUS * f64::from(stats.goals_scored);
    total += GOAL_BONUS * f64::from(stats.penalties_scored);
    total += ASSIST_BONUS * f64::from(stats.assists);
    total -= PENALTY_MISS_MALUS * f64::from(stats.penalties_missed);
    total -= OWN_GOAL_MALUS * f64::from(stats.own_goals);
    if stats.yellow_card {
        total -= YELLOW_CARD_MALUS;
    }
    if stats.red_card {
        total -= RED_CARD_MALUS;
    }

    if role == Role::Goalkeeper {
        total -= GOAL_CONCEDED_MALUS * f64::from(stats.goals_conceded);
        total += PENALTY_SAVE_BONUS * f64::from(stats.penalties_saved);
        if stats.clean_sheet {
            total += CLEAN_SHEET_BONUS;
        }
    }

    total
}

/// Fantavoto for `player` on `matchday`.
///
/// A matchday with no record at all counts the same as an unrated one.
pub fn player_fantavoto(player: &Player, matchday: Matchday) -> f64 {
    player
        .stats_for(matchday)
        .map_or(0.0, |stats| fantavoto(stats, player.role))
}
