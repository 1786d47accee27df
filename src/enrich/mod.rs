//! Natural-language enrichment from an external text-generation service.
//!
//! - `client`: one logical call with bounded retry and linear backoff
//! - `orchestrator`: concurrent fan-out over keyed prompt contexts
//! - `openai`: chat-completions provider over HTTP
//! - `prompts`: prompt builders for position groups and squads

pub mod client;
pub mod openai;
pub mod orchestrator;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;

pub use client::{EnrichmentClient, RetryPolicy, FALLBACK_ANALYSIS};
pub use orchestrator::enrich_all;

/// One fully specified completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// What varies per enrichment call; model settings come from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl PromptContext {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
        }
    }
}

/// External text-generation provider. Calls may fail transiently.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
