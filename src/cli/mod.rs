//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::Matchday;

/// Input locations shared by every command.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to the teams JSON file.
    #[clap(long, short)]
    pub teams: PathBuf,

    /// Directory with the matchday CSV files (or set `FANTA_DATA_DIR` env var).
    #[clap(long, short)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "fantacalcio-sim", about = "Fantacalcio season simulator")]
pub struct Fanta {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate the whole season and print the final table.
    ///
    /// Builds a round-robin schedule from the teams file, replays every
    /// matchday against the recorded statistics, and ranks the league.
    Simulate {
        #[clap(flatten)]
        input: InputArgs,

        /// Round-robin cycles to play (2 = home and away).
        #[clap(long, short, default_value_t = 2)]
        rounds: u8,

        /// Display name for the season report.
        #[clap(long, default_value = "Fantacalcio")]
        season_name: String,

        /// Print every match, matchday by matchday.
        #[clap(long)]
        match_log: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Play a single matchday and print its fixtures and scores.
    Matchday {
        #[clap(flatten)]
        input: InputArgs,

        /// Matchday number to play.
        #[clap(long, short, default_value_t = Matchday::default())]
        matchday: Matchday,

        /// Round-robin cycles the schedule assumes.
        #[clap(long, short, default_value_t = 2)]
        rounds: u8,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one team's best lineup for a matchday.
    Lineup {
        #[clap(flatten)]
        input: InputArgs,

        /// Team name as declared in the teams file.
        #[clap(long)]
        team: String,

        /// Matchday number.
        #[clap(long, short, default_value_t = Matchday::default())]
        matchday: Matchday,

        /// Output the lineup as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Validate the teams file and matchday data without simulating.
    Check {
        #[clap(flatten)]
        input: InputArgs,
    },
}
