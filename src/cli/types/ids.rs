//! ID types for fantacalcio players.

use crate::error::{FantaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for fantacalcio player codes.
///
/// Player codes are the stable identifiers assigned by the rating provider;
/// they survive renames and transfers within a season, so every lookup and
/// every deterministic tie-break in the simulator keys on them rather than on
/// player names.
///
/// # Examples
///
/// ```rust
/// use fantacalcio_sim::PlayerCode;
///
/// let code = PlayerCode::new(2170);
/// assert_eq!(code.as_u32(), 2170);
/// assert_eq!(code.to_string(), "2170");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerCode(pub u32);

impl PlayerCode {
    /// Create a new PlayerCode from a u32 value.
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerCode {
    type Err = FantaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
