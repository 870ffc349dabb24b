//! Error types for the fantacalcio season simulator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FantaError>;


#[derive(Error, Debug)]
pub enum FantaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse numeric argument: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Data directory not provided and {env_var} environment variable not set")]
    MissingDataDir { env_var: String },

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Roster of {team} references unknown player code {code}")]
    UnknownPlayerCode { code: u32, team: String },

    #[error("Duplicate player code {code} in roster of {team}")]
    DuplicatePlayer { code: u32, team: String },

    #[error("Conflicting roles for player code {code}: {first} vs {second}")]
    RoleConflict {
        code: u32,
        first: String,
        second: String,
    },

    #[error("Invalid roster for {team}: {message}")]
    Roster { team: String, message: String },

    #[error("Schedule error: {message}")]
    Schedule { message: String },

    #[error("Load error: {0}")]
    Load(#[from] anyhow::Error),
}
