//! Output models used for printing and JSON serialization.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{Gameweek, PlayerId, PlayerStatus, Position};
use crate::engine::scorer::Recommendation;

/// A scored player as shown to callers.
///
/// This is the recommendation view, not the raw record: prices are in
/// millions and fixtures are pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecommendation {
    pub player_id: PlayerId,
    pub name: String,
    /// Team short code, `UNK` when the team is not in the snapshot.
    pub team: String,
    pub position: Position,
    pub price: f64,
    pub total_points: i32,
    pub form: f64,
    pub value_for_money: f64,
    pub fixture_score: f64,
    pub overall_score: f64,
    /// Next fixtures, e.g. `ARS (H) [Diff: 4]`.
    pub next_fixtures: Vec<String>,
    pub injury_status: PlayerStatus,
    pub chance_of_playing: Option<u8>,
    pub recommendation: Recommendation,
}

/// Top players for one position with their shared analysis.
#[derive(Debug, Clone, Serialize)]
pub struct PositionRecommendation {
    pub players: Vec<PlayerRecommendation>,
    pub analysis: String,
}

/// Response for the top-players request, keyed by position name.
#[derive(Debug, Clone, Serialize)]
pub struct TopRecommendations {
    pub top_players_by_position: BTreeMap<String, PositionRecommendation>,
    pub current_gameweek: Gameweek,
    /// Unix seconds.
    pub generated_at: u64,
    pub insights: String,
}

/// A generated squad.
#[derive(Debug, Clone, Serialize)]
pub struct SquadResult {
    pub selected_players: Vec<PlayerRecommendation>,
    /// Sum of prices in millions.
    pub total_cost: f64,
    pub projected_points: i64,
    pub analysis: String,
    /// Number of selected players per position.
    pub position_breakdown: BTreeMap<Position, usize>,
}
