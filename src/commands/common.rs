//! Shared command setup and text formatting.

use std::sync::Arc;

use crate::{
    config::Config,
    enrich::{client::ModelSettings, openai::OpenAiGenerator, EnrichmentClient},
    models::output::PlayerRecommendation,
    service::RecommendationService,
    snapshot::SnapshotHandle,
    storage::PlayerDatabase,
    FplError, Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: Config,
    pub db: PlayerDatabase,
    pub snapshot: Arc<SnapshotHandle>,
}

impl CommandContext {
    /// Open the database and load the stored dataset into a snapshot
    pub fn new(config: Config) -> Result<Self> {
        let db = PlayerDatabase::open(&config.db_path)?;
        let snapshot = Arc::new(SnapshotHandle::new(db.load_snapshot()?));

        Ok(Self {
            config,
            db,
            snapshot,
        })
    }

    /// Fail early when nothing has been refreshed yet
    pub fn require_data(&self) -> Result<()> {
        if self.snapshot.load().player_count() == 0 {
            return Err(FplError::NoData);
        }
        Ok(())
    }

    /// Build the service with the configured OpenAI-compatible generator
    pub fn service(&self) -> Result<RecommendationService> {
        let generator = OpenAiGenerator::new(
            self.config.openai_base_url.clone(),
            self.config.require_api_key()?,
        )?;
        let enrichment = EnrichmentClient::new(
            Arc::new(generator),
            ModelSettings::from_config(&self.config),
            self.config.retry_policy(),
        );
        Ok(RecommendationService::new(self.snapshot.clone(), enrichment))
    }
}

/// One text line per player, e.g.
/// `Salah (LIV) £13.2m | 211 pts | form 7.8 | score 68.40 | BUY`
pub fn format_player_line(p: &PlayerRecommendation) -> String {
    let mut line = format!(
        "{} ({}) £{:.1}m | {} pts | form {:.1} | score {:.2} | {}",
        p.name,
        p.team,
        p.price,
        p.total_points,
        p.form,
        p.overall_score,
        p.recommendation
    );
    if p.injury_status.is_out() || p.chance_of_playing.is_some() {
        line.push_str(&format!(" [{}", p.injury_status));
        if let Some(chance) = p.chance_of_playing {
            line.push_str(&format!(" {}%", chance));
        }
        line.push(']');
    }
    if !p.next_fixtures.is_empty() {
        line.push_str(&format!("\n      next: {}", p.next_fixtures.join(", ")));
    }
    line
}
