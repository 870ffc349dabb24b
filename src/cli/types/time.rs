//! Matchday numbering for a fantacalcio season.

use crate::error::{FantaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for matchday numbers (1-based).
///
/// A full Serie A season has 38 matchdays, but the simulator treats the season
/// length as configuration, so this wrapper only guarantees "small positive
/// number", not an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Matchday(pub u8);

impl Matchday {
    pub fn new(matchday: u8) -> Self {
        Self(matchday)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for Matchday {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Matchday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Matchday {
    type Err = FantaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
