//! Request-level operations: top players per position and squad generation.
//!
//! Each request clones the current snapshot once, runs the synchronous engine
//! against it, then fans enrichment out concurrently.

pub mod refresh;
pub mod validate;


use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use crate::cli::types::Position;
use crate::engine::view::to_recommendation;
use crate::engine::{rank_players, select, ScoredPlayer, SquadRequest};
use crate::enrich::prompts::{squad_prompt, top_players_prompt};
use crate::enrich::{enrich_all, EnrichmentClient};
use crate::error::Result;
use crate::models::output::{PositionRecommendation, SquadResult, TopRecommendations};
use crate::snapshot::{PlayerStore, SnapshotHandle};

pub use refresh::refresh_data;
pub use validate::validate_squad_request;

/// Players listed per position in the top-players response.
pub const TOP_PLAYERS_PER_POSITION: usize = 5;

pub const TOP_PLAYERS_INSIGHTS: &str = "Top MVP recommendations generated successfully";

#[derive(Clone)]
pub struct RecommendationService {
    snapshot: Arc<SnapshotHandle>,
    enrichment: EnrichmentClient,
}

impl RecommendationService {
    pub fn new(snapshot: Arc<SnapshotHandle>, enrichment: EnrichmentClient) -> Self {
        Self {
            snapshot,
            enrichment,
        }
    }

    /// Best available players for each position, with one analysis per
    /// position generated concurrently.
    pub async fn generate_top_recommendations(&self) -> Result<TopRecommendations> {
        let snapshot = self.snapshot.load();

        let mut groups: Vec<(Position, Vec<ScoredPlayer>)> = Vec::with_capacity(4);
        for position in Position::ALL {
            let available = snapshot
                .find_by_position(position)
                .into_iter()
                .filter(|p| !p.status.is_out())
                .collect();
            let top: Vec<ScoredPlayer> = rank_players(snapshot.as_ref(), available)
                .into_iter()
                .take(TOP_PLAYERS_PER_POSITION)
                .collect();
            debug!(%position, players = top.len(), "ranked position");
            groups.push((position, top));
        }

        let contexts = groups
            .iter()
            .map(|(position, top)| (*position, top_players_prompt(*position, top)))
            .collect();
        let mut analyses = enrich_all(&self.enrichment, contexts).await;

        let mut by_position = BTreeMap::new();
        for (position, top) in groups {
            let players = top
                .iter()
                .map(|s| to_recommendation(snapshot.as_ref(), s))
                .collect();
            let analysis = analyses.remove(&position).unwrap_or_default();
            by_position.insert(
                position.key().to_string(),
                PositionRecommendation { players, analysis },
            );
        }

        Ok(TopRecommendations {
            top_players_by_position: by_position,
            current_gameweek: snapshot.current_gameweek(),
            generated_at: unix_now(),
            insights: TOP_PLAYERS_INSIGHTS.to_string(),
        })
    }

    /// Validate `request`, select a squad and attach its analysis.
    pub async fn generate_squad(&self, request: SquadRequest) -> Result<SquadResult> {
        let snapshot = self.snapshot.load();
        validate_squad_request(&request, &snapshot.all_player_ids())?;

        let selection = select(&request, snapshot.as_ref())?;
        info!(
            budget = request.budget,
            formation = %request.formation,
            players = selection.players.len(),
            total_cost = selection.total_cost(),
            "squad selected"
        );

        let analysis = self
            .enrichment
            .enrich(&squad_prompt(request.budget, &selection.players))
            .await;

        Ok(SquadResult {
            selected_players: selection
                .players
                .iter()
                .map(|s| to_recommendation(snapshot.as_ref(), s))
                .collect(),
            total_cost: selection.total_cost(),
            projected_points: selection.projected_points(),
            analysis,
            position_breakdown: selection.position_breakdown(),
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
