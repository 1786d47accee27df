//! Fantasy Premier League squad recommendations
//!
//! Scores players from a locally cached FPL dataset, picks budget-constrained
//! squads for a formation, and attaches natural-language analysis produced by
//! an OpenAI-compatible text-generation service.
//!
//! ## Features
//!
//! - **Data Refresh**: Fetch players, teams and fixtures from the public FPL API into SQLite
//! - **Player Scoring**: Weighted form, points, value-for-money and fixture difficulty
//! - **Squad Selection**: Greedy, formation-driven selection in integer budget arithmetic
//! - **Concurrent Enrichment**: One analysis call per position group, retried with backoff
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_mvp::engine::{parse_formation, select, SquadRequest};
//! use fpl_mvp::snapshot::Snapshot;
//!
//! let formation = parse_formation("4-4-2").unwrap();
//! assert_eq!(formation.values().sum::<usize>(), 11);
//!
//! // An empty dataset is a valid, if short, pool
//! let selection = select(&SquadRequest::new(100.0, "4-4-2"), &Snapshot::default()).unwrap();
//! assert!(selection.players.is_empty());
//! ```
//!
//! ## Environment Configuration
//!
//! Enrichment needs an API key:
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! ```
//! See [`config`] for the remaining `FPL_MVP_*` settings.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod fpl;
pub mod logging;
pub mod models;
pub mod service;
pub mod snapshot;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use cli::types::{FixtureId, Gameweek, PlayerId, PlayerStatus, Position, TeamId};
pub use config::Config;
pub use engine::{Recommendation, SquadRequest};
pub use error::{FplError, Result};
pub use models::output::{PlayerRecommendation, SquadResult, TopRecommendations};
pub use service::RecommendationService;
