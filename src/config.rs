//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::enrich::openai::OPENAI_BASE_URL;
use crate::enrich::RetryPolicy;
use crate::error::{FplError, Result};
use crate::fpl::http::FPL_BASE_URL;

pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL_ENV_VAR: &str = "FPL_MVP_OPENAI_BASE_URL";
pub const MODEL_ENV_VAR: &str = "FPL_MVP_MODEL";
pub const MAX_TOKENS_ENV_VAR: &str = "FPL_MVP_MAX_TOKENS";
pub const TEMPERATURE_ENV_VAR: &str = "FPL_MVP_TEMPERATURE";
pub const BACKOFF_MS_ENV_VAR: &str = "FPL_MVP_BACKOFF_MS";
pub const FPL_BASE_URL_ENV_VAR: &str = "FPL_MVP_API_BASE_URL";
pub const DB_PATH_ENV_VAR: &str = "FPL_MVP_DB_PATH";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_BACKOFF_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub backoff_base: Duration,
    pub fpl_base_url: String,
    pub db_path: PathBuf,
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T> {
    match var(key) {
        Some(raw) => raw.trim().parse().map_err(|_| FplError::InvalidConfig {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

/// Path: ~/.cache/fpl-mvp/fpl.db
pub fn default_db_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("fpl-mvp").join("fpl.db")
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let temperature: f64 = parse_var(TEMPERATURE_ENV_VAR, DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(FplError::InvalidConfig {
                key: TEMPERATURE_ENV_VAR.to_string(),
                value: temperature.to_string(),
            });
        }

        Ok(Self {
            api_key: var(API_KEY_ENV_VAR),
            openai_base_url: var(OPENAI_BASE_URL_ENV_VAR)
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            model: var(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: parse_var(MAX_TOKENS_ENV_VAR, DEFAULT_MAX_TOKENS)?,
            temperature,
            backoff_base: Duration::from_millis(parse_var(BACKOFF_MS_ENV_VAR, DEFAULT_BACKOFF_MS)?),
            fpl_base_url: var(FPL_BASE_URL_ENV_VAR).unwrap_or_else(|| FPL_BASE_URL.to_string()),
            db_path: var(DB_PATH_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
        })
    }

    /// API key for the text-generation provider.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| FplError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            backoff_base: self.backoff_base,
            ..RetryPolicy::default()
        }
    }
}
