//! Full-season simulation command.

use serde::Serialize;

use crate::cli::InputArgs;
use crate::engine::{run_season, MatchLogEntry, SeasonConfig, SeasonReport, StandingsRow};
use crate::error::Result;
use crate::league::RoleCounts;

use super::{format_match_line, load_from_args};

/// Arguments for the simulate command.
#[derive(Debug)]
pub struct SimulateParams {
    pub input: InputArgs,
    pub rounds: u8,
    pub season_name: String,
    pub match_log: bool,
    pub json: bool,
}

/// JSON payload for a simulated season.
#[derive(Debug, Serialize)]
struct SimulateOutput {
    season: String,
    table: Vec<StandingsRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<Vec<MatchLogEntry>>,
    highest_single_score: Option<Highlight>,
    most_consistent: Option<Highlight>,
}

#[derive(Debug, Serialize)]
struct Highlight {
    team: String,
    value: f64,
}

/// Handle the simulate command.
pub fn handle_simulate(params: SimulateParams) -> Result<()> {
    let (store, teams) = load_from_args(&params.input)?;

    let config = SeasonConfig {
        rounds: params.rounds,
        name: params.season_name,
        roster_rules: RoleCounts::CLASSIC_ROSTER,
    };
    if !params.json {
        println!(
            "Simulating '{}': {} teams over {} round(s)...",
            config.name,
            teams.len(),
            config.rounds
        );
    }

    let report = run_season(&teams, &config)?;

    if !params.json {
        println!("✓ {} matches played", report.matches.len());
        let scheduled = report
            .matches
            .last()
            .map(|m| m.matchday.as_u8() as usize)
            .unwrap_or(0);
        if scheduled > store.matchday_count() {
            println!(
                "Note: the schedule runs {scheduled} matchdays but data covers {}; the rest play unrated",
                store.matchday_count()
            );
        }
    }

    if params.json {
        print_json(&report, params.match_log)
    } else {
        print_text(&report, params.match_log);
        Ok(())
    }
}

fn print_text(report: &SeasonReport, match_log: bool) {
    if match_log {
        let mut current = 0;
        for entry in report.match_log() {
            if entry.matchday != current {
                current = entry.matchday;
                println!("\nMatchday {current}");
            }
            println!("  {}", format_match_line(&entry));
        }
    }

    println!("\nFinal table: {}", report.season_name);
    println!(
        "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4} {:>9}",
        "Pos", "Team", "Pld", "W", "D", "L", "GF", "GA", "+/-", "Pts", "Score"
    );
    for row in &report.table {
        println!(
            "{:>3}  {:<20} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4} {:>9.2}",
            row.rank,
            row.team,
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_diff,
            row.points,
            row.score_total
        );
    }

    if let Some(champion) = report.champion() {
        println!("\n✓ Champion: {} ({} points)", champion.team, champion.points);
    }
    if let Some((team, total)) = report.highest_single_score() {
        println!("Highest single score: {total:.2} ({team})");
    }
    if let Some((team, spread)) = report.most_consistent_team() {
        println!("Most consistent: {team} (best-to-worst spread {spread:.2})");
    }
}

fn print_json(report: &SeasonReport, include_matches: bool) -> Result<()> {
    let output = SimulateOutput {
        season: report.season_name.clone(),
        table: report.table.clone(),
        matches: include_matches.then(|| report.match_log()),
        highest_single_score: report
            .highest_single_score()
            .map(|(team, value)| Highlight {
                team: team.to_string(),
                value,
            }),
        most_consistent: report
            .most_consistent_team()
            .map(|(team, value)| Highlight {
                team: team.to_string(),
                value,
            }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
