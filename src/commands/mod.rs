//! Command implementations for the fantacalcio season simulator.

pub mod check;
pub mod lineup;
pub mod matchday;
pub mod simulate;

use std::path::PathBuf;

use crate::cli::InputArgs;
use crate::error::{FantaError, Result};
use crate::league::{RecordStore, RoleCounts, Team};
use crate::loader;
use crate::DATA_DIR_ENV_VAR;


/// Resolve the data directory from the flag or the environment.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    data_dir
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .ok_or_else(|| FantaError::MissingDataDir {
            env_var: DATA_DIR_ENV_VAR.to_string(),
        })
}

/// Load the record store and the teams from the shared input arguments.
pub(crate) fn load_from_args(input: &InputArgs) -> Result<(RecordStore, Vec<Team>)> {
    let data_dir = resolve_data_dir(input.data_dir.clone())?;
    loader::load_league(&input.teams, &data_dir, &RoleCounts::CLASSIC_ROSTER)
}

/// One printable match line: names, goals, and the raw scores.
pub(crate) fn format_match_line(entry: &crate::engine::MatchLogEntry) -> String {
    format!(
        "{:<20} {}-{} {:<20} ({:.2} - {:.2})",
        entry.home,
        entry.home_goals,
        entry.away_goals,
        entry.away,
        entry.home_score,
        entry.away_score
    )
}
