//! Player scoring: composite ranking score, fixture difficulty and the
//! BUY/HOLD/WATCH/AVOID label.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::cli::types::PlayerStatus;
use crate::models::{Fixture, Player};

const FORM_WEIGHT: f64 = 2.0;
const POINTS_WEIGHT: f64 = 0.1;
const VALUE_WEIGHT: f64 = 1.5;
const FIXTURE_WEIGHT: f64 = 1.5;

/// Difficulty assumed when a team has no upcoming fixtures.
const DEFAULT_DIFFICULTY: f64 = 3.0;
const MAX_DIFFICULTY: f64 = 5.0;

/// How many upcoming fixtures feed the fixture score.
pub const FIXTURE_HORIZON: usize = 5;

/// A player with the derived metrics used for ranking
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlayer {
    pub player: Player,
    pub value_for_money: f64,
    pub fixture_score: f64,
    pub overall_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Watch,
    Avoid,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Watch => "WATCH",
            Recommendation::Avoid => "AVOID",
        };
        write!(f, "{}", s)
    }
}

/// 5.0 minus the mean difficulty the player's team faces across at most
/// [`FIXTURE_HORIZON`] fixtures.
pub fn fixture_score(player: &Player, upcoming: &[Fixture]) -> f64 {
    let difficulties: Vec<f64> = upcoming
        .iter()
        .take(FIXTURE_HORIZON)
        .map(|f| f64::from(f.difficulty_for(player.team)))
        .collect();

    let average = if difficulties.is_empty() {
        DEFAULT_DIFFICULTY
    } else {
        difficulties.iter().sum::<f64>() / difficulties.len() as f64
    };

    MAX_DIFFICULTY - average
}

pub fn score(player: &Player, upcoming: &[Fixture]) -> ScoredPlayer {
    let value_for_money = player.value_for_money();
    let fixture_score = fixture_score(player, upcoming);
    let overall_score = FORM_WEIGHT * player.form
        + POINTS_WEIGHT * f64::from(player.points())
        + VALUE_WEIGHT * value_for_money
        + FIXTURE_WEIGHT * fixture_score;

    ScoredPlayer {
        player: player.clone(),
        value_for_money,
        fixture_score,
        overall_score,
    }
}

impl ScoredPlayer {
    /// Branches overlap on boundary values, so the order below is significant.
    pub fn recommendation(&self) -> Recommendation {
        let form = self.player.form;
        let status = self.player.status;

        if status.is_out() {
            return Recommendation::Avoid;
        }
        if form > 5.0 && self.value_for_money > 3.0 && self.fixture_score > 3.0 {
            return Recommendation::Buy;
        }
        if form > 3.0 && self.value_for_money > 2.0 {
            return Recommendation::Hold;
        }
        if form < 2.0 || status == PlayerStatus::Doubtful {
            return Recommendation::Watch;
        }
        Recommendation::Hold
    }
}

/// Ranking order: overall score descending, then cheaper first, then lower id.
pub fn rank_order(a: &ScoredPlayer, b: &ScoredPlayer) -> Ordering {
    b.overall_score
        .total_cmp(&a.overall_score)
        .then(a.player.now_cost.cmp(&b.player.now_cost))
        .then(a.player.id.cmp(&b.player.id))
}
