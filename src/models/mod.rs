//! Domain records read by the recommendation engine.
//!
//! These are the snapshot-side shapes of players, teams and fixtures. They are
//! produced by the data refresh (see [`crate::fpl`]) and persisted by
//! [`crate::storage`]; the engine only ever reads them.

pub mod output;

use crate::cli::types::{FixtureId, Gameweek, PlayerId, PlayerStatus, Position, TeamId};
use serde::{Deserialize, Serialize};

/// Player information as held in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub web_name: String,
    pub team: TeamId,
    pub position: Position,
    /// Price in tenths of a million (FPL `now_cost`).
    pub now_cost: u32,
    pub total_points: Option<i32>,
    pub form: f64,
    pub selected_by_percent: f64,
    pub status: PlayerStatus,
    pub chance_of_playing: Option<u8>,
}

impl Player {
    /// Price in major units (millions).
    pub fn price(&self) -> f64 {
        self.now_cost as f64 / 10.0
    }

    /// Total points, treating missing as zero.
    pub fn points(&self) -> i32 {
        self.total_points.unwrap_or(0)
    }

    /// Points earned per million spent. Zero for free players.
    pub fn value_for_money(&self) -> f64 {
        if self.now_cost == 0 {
            return 0.0;
        }
        (self.points() as f64 / self.price()).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub gameweek: Gameweek,
    pub team_home: TeamId,
    pub team_away: TeamId,
    pub team_home_difficulty: u8,
    pub team_away_difficulty: u8,
    pub started: bool,
    pub finished: bool,
}

impl Fixture {
    pub fn is_home(&self, team: TeamId) -> bool {
        self.team_home == team
    }

    /// Difficulty rating from the point of view of `team`.
    pub fn difficulty_for(&self, team: TeamId) -> u8 {
        if self.is_home(team) {
            self.team_home_difficulty
        } else {
            self.team_away_difficulty
        }
    }

    /// The other side of the fixture.
    pub fn opponent_of(&self, team: TeamId) -> TeamId {
        if self.is_home(team) {
            self.team_away
        } else {
            self.team_home
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_home == team || self.team_away == team
    }
}

/// Parse a decimal that FPL sends as a string. Anything unparsable is 0.0.
pub fn parse_decimal(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
