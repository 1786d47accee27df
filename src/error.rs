//! Error types for the FPL MVP recommender

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid formation: {formation} (expected D-M-F, e.g. 4-4-2)")]
    InvalidFormation { formation: String },

    #[error("Invalid budget: {budget} (must be greater than 0 and at most 100)")]
    InvalidBudget { budget: f64 },

    #[error("Player ID {player_id} cannot be both must-have and excluded")]
    ConflictingPlayer { player_id: PlayerId },

    #[error("{role} player ID {player_id} does not exist")]
    UnknownPlayer { player_id: PlayerId, role: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("Text generation failed: {message}")]
    Generation { message: String },

    #[error("No FPL data available; run `fpl-mvp refresh` first")]
    NoData,
}
