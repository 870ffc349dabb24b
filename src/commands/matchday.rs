//! Single-matchday command.

use crate::cli::types::Matchday;
use crate::cli::InputArgs;
use crate::engine::{generate_fixtures, play_match, MatchLogEntry};
use crate::error::{FantaError, Result};

use super::{format_match_line, load_from_args};

/// Handle the matchday command: play one scheduled matchday and print it.
pub fn handle_matchday(
    input: InputArgs,
    matchday: Matchday,
    rounds: u8,
    json: bool,
) -> Result<()> {
    let (store, teams) = load_from_args(&input)?;

    let fixtures = generate_fixtures(teams.len(), rounds)?;
    let pairings = fixtures
        .pairings_for(matchday)
        .ok_or_else(|| FantaError::Schedule {
            message: format!(
                "matchday {matchday} is outside the schedule (1..={})",
                fixtures.matchday_count()
            ),
        })?;

    if !json && !store.has_matchday(matchday) {
        println!("Note: no data for matchday {matchday}, every lineup plays unrated");
    }

    let mut entries = Vec::with_capacity(pairings.len());
    for &pairing in pairings {
        let result = play_match(&teams, pairing, matchday)?;
        entries.push(MatchLogEntry {
            matchday: matchday.as_u8(),
            home: teams[result.home].name().to_string(),
            away: teams[result.away].name().to_string(),
            home_score: result.home_score.total,
            away_score: result.away_score.total,
            home_goals: result.home_score.goals,
            away_goals: result.away_score.goals,
            home_outcome: result.home_outcome(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("Matchday {matchday} ({} fixtures)", entries.len());
        for entry in &entries {
            println!("  {}", format_match_line(entry));
        }
    }
    Ok(())
}
