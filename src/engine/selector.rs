//! Greedy, budget-constrained squad selection.
//!
//! Positions are filled in formation order. For each one the best-scoring
//! affordable candidates are taken and their prices deducted from a running
//! budget held in tenths, so repeated subtraction never drifts.
//!
//! Candidates are checked against the budget individually when fetched, not
//! as a group once chosen. Taking the top N can therefore overspend and leave
//! the remaining budget negative; later positions then find nothing
//! affordable. Must-have players are appended last with no budget check at
//! all. Both are deliberate and are the only ways the total cost can exceed
//! the requested budget.

use rayon::prelude::*;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::formation::{parse_formation, Formation};
use super::scorer::{rank_order, score, ScoredPlayer, FIXTURE_HORIZON};
use crate::cli::types::{PlayerId, Position};
use crate::error::Result;
use crate::models::Player;
use crate::snapshot::PlayerStore;


/// A request to build a squad.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SquadRequest {
    /// Budget in millions.
    pub budget: f64,
    /// `D-M-F`, e.g. `4-4-2`.
    pub formation: String,
    #[serde(default)]
    pub must_have: BTreeSet<PlayerId>,
    #[serde(default)]
    pub excluded: BTreeSet<PlayerId>,
}

impl SquadRequest {
    pub fn new(budget: f64, formation: impl Into<String>) -> Self {
        Self {
            budget,
            formation: formation.into(),
            must_have: BTreeSet::new(),
            excluded: BTreeSet::new(),
        }
    }

    pub fn with_must_have(mut self, ids: impl IntoIterator<Item = PlayerId>) -> Self {
        self.must_have.extend(ids);
        self
    }

    pub fn with_excluded(mut self, ids: impl IntoIterator<Item = PlayerId>) -> Self {
        self.excluded.extend(ids);
        self
    }

    /// Budget in the same tenths scale as player prices.
    pub fn budget_tenths(&self) -> i64 {
        (self.budget * 10.0).round() as i64
    }
}

/// Outcome of selection, before enrichment.
#[derive(Debug, Clone)]
pub struct Selection {
    pub players: Vec<ScoredPlayer>,
    pub formation: Formation,
    pub budget_tenths: i64,
    /// May be negative, see the module docs.
    pub remaining_tenths: i64,
}

impl Selection {
    pub fn total_cost_tenths(&self) -> i64 {
        self.players
            .iter()
            .map(|s| i64::from(s.player.now_cost))
            .sum()
    }

    /// Total cost in millions.
    pub fn total_cost(&self) -> f64 {
        self.total_cost_tenths() as f64 / 10.0
    }

    pub fn projected_points(&self) -> i64 {
        self.players
            .iter()
            .map(|s| i64::from(s.player.points()))
            .sum()
    }

    /// Selected players per position; every position is present.
    pub fn position_breakdown(&self) -> BTreeMap<Position, usize> {
        let mut counts: BTreeMap<Position, usize> =
            Position::ALL.iter().map(|p| (*p, 0)).collect();
        for scored in &self.players {
            *counts.entry(scored.player.position).or_default() += 1;
        }
        counts
    }
}

/// Score every candidate against its own upcoming fixtures and sort best first.
pub fn rank_players<S>(store: &S, candidates: Vec<Player>) -> Vec<ScoredPlayer>
where
    S: PlayerStore + Sync + ?Sized,
{
    let mut scored: Vec<ScoredPlayer> = candidates
        .par_iter()
        .map(|p| score(p, &store.upcoming_fixtures(p.team, FIXTURE_HORIZON)))
        .collect();
    scored.sort_by(rank_order);
    scored
}

/// Build a squad for `request`.
///
/// Assumes the request was validated (see
/// [`validate_squad_request`](crate::service::validate::validate_squad_request)):
/// unknown must-have ids are skipped silently here.
pub fn select<S>(request: &SquadRequest, store: &S) -> Result<Selection>
where
    S: PlayerStore + Sync + ?Sized,
{
    let formation = parse_formation(&request.formation)?;
    let budget_tenths = request.budget_tenths();
    let mut remaining = budget_tenths;
    let mut players: Vec<ScoredPlayer> = Vec::new();

    for (&position, &count) in &formation {
        let candidates: Vec<Player> = store
            .find_affordable_by_position(remaining, position)
            .into_iter()
            .filter(|p| !request.excluded.contains(&p.id))
            .collect();

        let chosen: Vec<ScoredPlayer> = rank_players(store, candidates)
            .into_iter()
            .take(count)
            .collect();

        let spent: i64 = chosen.iter().map(|s| i64::from(s.player.now_cost)).sum();
        debug!(
            %position,
            required = count,
            chosen = chosen.len(),
            spent,
            remaining = remaining - spent,
            "filled position"
        );

        remaining -= spent;
        players.extend(chosen);
    }

    for id in &request.must_have {
        if players.iter().any(|s| s.player.id == *id) {
            continue;
        }
        if let Some(player) = store.find_by_id(*id) {
            let upcoming = store.upcoming_fixtures(player.team, FIXTURE_HORIZON);
            players.push(score(&player, &upcoming));
        }
    }

    Ok(Selection {
        players,
        formation,
        budget_tenths,
        remaining_tenths: remaining,
    })
}
