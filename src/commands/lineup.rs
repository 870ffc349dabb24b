//! Best-lineup command for a single team and matchday.

use serde::Serialize;

use crate::cli::types::Matchday;
use crate::cli::InputArgs;
use crate::engine::{score_lineup, select_lineup, Selection, TeamScore};
use crate::error::{FantaError, Result};

use super::load_from_args;

/// JSON payload for one team's lineup.
#[derive(Debug, Serialize)]
struct LineupOutput {
    team: String,
    matchday: u8,
    starters: Vec<Selection>,
    score: TeamScore,
}

/// Handle the lineup command: show one team's best eleven for a matchday.
pub fn handle_lineup(
    input: InputArgs,
    team_name: String,
    matchday: Matchday,
    json: bool,
) -> Result<()> {
    let (_, teams) = load_from_args(&input)?;

    let team = teams
        .iter()
        .find(|t| t.name() == team_name)
        .ok_or_else(|| FantaError::TeamNotFound {
            name: team_name.clone(),
        })?;

    let lineup = select_lineup(team, matchday)?;
    let score = score_lineup(&lineup);

    if json {
        let output = LineupOutput {
            team: team_name,
            matchday: matchday.as_u8(),
            starters: lineup.starters,
            score,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Lineup for {team_name}, matchday {matchday} (4-3-3)");
    for starter in &lineup.starters {
        let marker = if starter.rated { " " } else { "*" };
        println!(
            "  {} {:>6}  {:<24} {:>6.2}{marker}",
            starter.role,
            starter.code.as_u32(),
            starter.name,
            starter.fantavoto
        );
    }
    if lineup.unrated_count() > 0 {
        println!("  (* unrated filler, worth 0.0)");
    }
    println!("Total fantavoto:  {:.2}", score.base);
    println!("Defense modifier: +{:.0}", score.defense_modifier);
    println!("Final score:      {:.2} (goals: {})", score.total, score.goals);
    Ok(())
}
