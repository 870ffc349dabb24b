//! Fantacalcio player roles and utilities.

use crate::error::FantaError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fantacalcio player roles.
///
/// The rating provider tags every player with exactly one role for the whole
/// season, using the Italian single-letter codes:
///
/// - **P** (portiere): goalkeeper
/// - **D** (difensore): defender
/// - **C** (centrocampista): midfielder
/// - **A** (attaccante): forward
///
/// The role drives the goalkeeper-only fantavoto terms and the 4-3-3 lineup
/// slot counts, so it is a closed enum rather than an open string.
///
/// # Examples
///
/// ```rust
/// use fantacalcio_sim::Role;
///
/// let role: Role = "D".parse().unwrap();
/// assert_eq!(role, Role::Defender);
/// assert_eq!(role.to_string(), "D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    /// All roles in lineup order (goalkeeper first, forwards last).
    ///
    /// Iterating this array is the crate-wide convention for anything that
    /// must visit roles in a deterministic order.
    pub const ALL: [Role; 4] = [
        Role::Goalkeeper,
        Role::Defender,
        Role::Midfielder,
        Role::Forward,
    ];

    /// The single-letter wire code used by the rating provider.
    pub fn code(&self) -> char {
        match self {
            Role::Goalkeeper => 'P',
            Role::Defender => 'D',
            Role::Midfielder => 'C',
            Role::Forward => 'A',
        }
    }

    /// English name for human-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "Goalkeeper",
            Role::Defender => "Defender",
            Role::Midfielder => "Midfielder",
            Role::Forward => "Forward",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Role {
    type Err = FantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "P" | "GK" | "GOALKEEPER" => Ok(Role::Goalkeeper),
            "D" | "DEF" | "DEFENDER" => Ok(Role::Defender),
            "C" | "MID" | "MIDFIELDER" => Ok(Role::Midfielder),
            "A" | "FW" | "FORWARD" => Ok(Role::Forward),
            _ => Err(FantaError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

// Wire format is the single-letter code, both ways.
impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
