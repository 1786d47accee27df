//! Player availability status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability of a player for the next round.
///
/// FPL reports single-letter codes: `a` available, `d` doubtful, `i` injured.
/// Every other code (`u` unavailable, `s` suspended, `n` not in squad) maps to
/// `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    Available,
    Doubtful,
    Injured,
    Unavailable,
}

impl PlayerStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "a" => PlayerStatus::Available,
            "d" => PlayerStatus::Doubtful,
            "i" => PlayerStatus::Injured,
            _ => PlayerStatus::Unavailable,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PlayerStatus::Available => "a",
            PlayerStatus::Doubtful => "d",
            PlayerStatus::Injured => "i",
            PlayerStatus::Unavailable => "u",
        }
    }

    /// Injured or otherwise unable to play.
    pub fn is_out(&self) -> bool {
        matches!(self, PlayerStatus::Injured | PlayerStatus::Unavailable)
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerStatus::Available => "Available",
            PlayerStatus::Doubtful => "Doubtful",
            PlayerStatus::Injured => "Injured",
            PlayerStatus::Unavailable => "Unavailable",
        };
        write!(f, "{}", s)
    }
}
