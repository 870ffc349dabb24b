//! Full-season orchestration: schedule, matchday loop, final table.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::types::Matchday;
use crate::error::Result;
use crate::league::{RoleCounts, Team};

use super::lineup::select_lineup;
use super::schedule::{generate_fixtures, Pairing};
use super::score::score_lineup;
use super::standings::{MatchResult, Outcome, Standings, StandingsRow};


/// Season-level configuration.
#[derive(Debug, Clone)]
pub struct SeasonConfig {
    /// Round-robin cycles to play (2 = classic double round-robin).
    pub rounds: u8,
    /// Display name used in reports.
    pub name: String,
    /// Expected roster shape, validated before the first matchday.
    pub roster_rules: RoleCounts,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            rounds: 2,
            name: "Fantacalcio".to_string(),
            roster_rules: RoleCounts::CLASSIC_ROSTER,
        }
    }
}

/// One line of the per-matchday match log.
#[derive(Debug, Clone, Serialize)]
pub struct MatchLogEntry {
    pub matchday: u8,
    pub home: String,
    pub away: String,
    pub home_score: f64,
    pub away_score: f64,
    pub home_goals: u8,
    pub away_goals: u8,
    pub home_outcome: Outcome,
}

/// Everything a finished season produces.
#[derive(Debug)]
pub struct SeasonReport {
    pub season_name: String,
    /// Team names in registration order; match results index into this.
    pub team_names: Vec<String>,
    /// Every match played, in matchday order.
    pub matches: Vec<MatchResult>,
    /// The final table, best first.
    pub table: Vec<StandingsRow>,
}

impl SeasonReport {
    /// The top of the final table.
    pub fn champion(&self) -> Option<&StandingsRow> {
        self.table.first()
    }

    /// The best single-match score of the season, with its team.
    pub fn highest_single_score(&self) -> Option<(&str, f64)> {
        self.matches
            .iter()
            .flat_map(|m| {
                [
                    (m.home, m.home_score.total),
                    (m.away, m.away_score.total),
                ]
            })
            // Ties go to the earlier-registered team.
            .max_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(index, total)| (self.team_names[index].as_str(), total))
    }

    /// The team with the smallest spread between its best and worst match.
    pub fn most_consistent_team(&self) -> Option<(&str, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for index in 0..self.team_names.len() {
            let scores: Vec<f64> = self
                .matches
                .iter()
                .filter_map(|m| {
                    if m.home == index {
                        Some(m.home_score.total)
                    } else if m.away == index {
                        Some(m.away_score.total)
                    } else {
                        None
                    }
                })
                .collect();
            let (Some(min), Some(max)) = (
                scores.iter().copied().reduce(f64::min),
                scores.iter().copied().reduce(f64::max),
            ) else {
                continue;
            };
            let spread = max - min;
            let better = match best {
                None => true,
                Some((_, incumbent)) => spread < incumbent,
            };
            if better {
                best = Some((index, spread));
            }
        }
        best.map(|(index, spread)| (self.team_names[index].as_str(), spread))
    }

    /// Flatten the season's matches into displayable log entries.
    pub fn match_log(&self) -> Vec<MatchLogEntry> {
        self.matches
            .iter()
            .map(|m| MatchLogEntry {
                matchday: m.matchday.as_u8(),
                home: self.team_names[m.home].clone(),
                away: self.team_names[m.away].clone(),
                home_score: m.home_score.total,
                away_score: m.away_score.total,
                home_goals: m.home_score.goals,
                away_goals: m.away_score.goals,
                home_outcome: m.home_outcome(),
            })
            .collect()
    }
}

/// Play one fixture: select and score both lineups.
///
/// Reads only shared team data, so fixtures of the same matchday can run in
/// parallel.
pub fn play_match(teams: &[Team], pairing: Pairing, matchday: Matchday) -> Result<MatchResult> {
    let home = &teams[pairing.home];
    let away = &teams[pairing.away];
    let home_score = score_lineup(&select_lineup(home, matchday)?);
    let away_score = score_lineup(&select_lineup(away, matchday)?);
    debug!(
        matchday = %matchday,
        home = home.name(),
        away = away.name(),
        result = format!("{}-{}", home_score.goals, away_score.goals),
        "match played"
    );
    Ok(MatchResult {
        matchday,
        home: pairing.home,
        away: pairing.away,
        home_score,
        away_score,
    })
}

/// Simulate a whole season: validate rosters, build the schedule, play every
/// matchday, rank the final table.
///
/// Matchday `i` of the schedule consumes matchday `i` of the recorded data;
/// scheduled matchdays past the data still play, with all-unrated lineups.
pub fn run_season(teams: &[Team], config: &SeasonConfig) -> Result<SeasonReport> {
    for team in teams {
        team.validate_roster(&config.roster_rules, &RoleCounts::FORMATION_433)?;
    }

    let fixtures = generate_fixtures(teams.len(), config.rounds)?;
    info!(
        season = %config.name,
        teams = teams.len(),
        matchdays = fixtures.matchday_count(),
        "schedule ready"
    );

    let mut standings = Standings::new(teams.len());
    let mut matches = Vec::with_capacity(fixtures.matchday_count() * teams.len() / 2);

    for (matchday, pairings) in fixtures.iter() {
        // Fixtures within a matchday are independent; standings accumulate
        // sequentially afterwards so results stay in schedule order.
        let results = pairings
            .par_iter()
            .map(|&pairing| play_match(teams, pairing, matchday))
            .collect::<Result<Vec<_>>>()?;

        if results
            .iter()
            .all(|r| r.home_score.base == 0.0 && r.away_score.base == 0.0)
        {
            warn!(
                matchday = %matchday,
                "no rated players anywhere, matchday data is probably missing"
            );
        }

        for result in &results {
            standings.record_match(result);
        }
        matches.extend(results);
    }

    let table = standings.final_table(teams);
    info!(
        season = %config.name,
        champion = table.first().map(|row| row.team.as_str()).unwrap_or("-"),
        "season complete"
    );

    Ok(SeasonReport {
        season_name: config.name.clone(),
        team_names: teams.iter().map(|t| t.name().to_string()).collect(),
        matches,
        table,
    })
}
