//! Wire types for the public FPL API and their conversion to domain records.

use serde::{Deserialize, Serialize};

use crate::cli::types::{FixtureId, Gameweek, PlayerId, PlayerStatus, Position, TeamId};
use crate::models::{parse_decimal, Fixture, Player, Team};


/// Root of `/bootstrap-static/`. Only the parts we store are kept.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapData {
    #[serde(default)]
    pub teams: Vec<FplTeam>,
    #[serde(default)]
    pub elements: Vec<FplElement>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FplTeam {
    pub id: u32,
    pub name: String,
    pub short_name: String,
}

/// A player ("element") from the bootstrap payload.
///
/// Decimal statistics arrive as strings, e.g. `"form": "5.5"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FplElement {
    pub id: u64,
    #[serde(default)]
    pub web_name: String,
    pub team: u32,
    pub element_type: u8,
    pub now_cost: u32,
    #[serde(default)]
    pub total_points: Option<i32>,
    #[serde(default)]
    pub form: Option<String>,
    #[serde(default)]
    pub selected_by_percent: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub chance_of_playing_next_round: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FplFixture {
    pub id: u64,
    /// Gameweek; null while a fixture is unscheduled.
    pub event: Option<u16>,
    pub team_h: u32,
    pub team_a: u32,
    pub team_h_difficulty: u8,
    pub team_a_difficulty: u8,
    #[serde(default)]
    pub started: Option<bool>,
    #[serde(default)]
    pub finished: bool,
}

impl From<FplTeam> for Team {
    fn from(t: FplTeam) -> Self {
        Team {
            id: TeamId::new(t.id),
            name: t.name,
            short_name: t.short_name,
        }
    }
}

impl FplElement {
    /// `None` for element types that are not playing positions.
    pub fn into_player(self) -> Option<Player> {
        let position = Position::from_element_type(self.element_type).ok()?;
        Some(Player {
            id: PlayerId::new(self.id),
            web_name: self.web_name,
            team: TeamId::new(self.team),
            position,
            now_cost: self.now_cost,
            total_points: self.total_points,
            form: parse_decimal(self.form.as_deref()),
            selected_by_percent: parse_decimal(self.selected_by_percent.as_deref()),
            status: PlayerStatus::from_code(&self.status),
            chance_of_playing: self.chance_of_playing_next_round,
        })
    }
}

impl FplFixture {
    /// `None` for fixtures without a gameweek.
    pub fn into_fixture(self) -> Option<Fixture> {
        Some(Fixture {
            id: FixtureId::new(self.id),
            gameweek: Gameweek::new(self.event?),
            team_home: TeamId::new(self.team_h),
            team_away: TeamId::new(self.team_a),
            team_home_difficulty: self.team_h_difficulty,
            team_away_difficulty: self.team_a_difficulty,
            started: self.started.unwrap_or(false),
            finished: self.finished,
        })
    }
}

/// Domain records converted from one refresh.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub fixtures: Vec<Fixture>,
}

impl Dataset {
    pub fn from_wire(bootstrap: BootstrapData, fixtures: Vec<FplFixture>) -> Self {
        Self {
            teams: bootstrap.teams.into_iter().map(Team::from).collect(),
            players: bootstrap
                .elements
                .into_iter()
                .filter_map(FplElement::into_player)
                .collect(),
            fixtures: fixtures
                .into_iter()
                .filter_map(FplFixture::into_fixture)
                .collect(),
        }
    }
}
