//! Retrying wrapper around a single text-generation call.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

use super::{CompletionRequest, PromptContext, TextGenerator};
use crate::config::Config;

/// Returned when every attempt failed.
pub const FALLBACK_ANALYSIS: &str = "analysis temporarily unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Attempt `k` that fails waits `backoff_base * k` before the next one.
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_base * attempt
    }
}

/// Model settings applied to every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl ModelSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Wraps a [`TextGenerator`] so that a call always resolves to some text.
#[derive(Clone)]
pub struct EnrichmentClient {
    generator: Arc<dyn TextGenerator>,
    settings: ModelSettings,
    policy: RetryPolicy,
}

impl EnrichmentClient {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: ModelSettings, policy: RetryPolicy) -> Self {
        Self {
            generator,
            settings,
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    fn request_for(&self, context: &PromptContext) -> CompletionRequest {
        CompletionRequest {
            system_prompt: context.system_prompt.clone(),
            user_prompt: context.user_prompt.clone(),
            model: self.settings.model.clone(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// Run the call, retrying failures. Never returns an error; after the
    /// last failed attempt the result is [`FALLBACK_ANALYSIS`].
    ///
    /// Backoff uses the async timer, so only the calling task waits.
    pub async fn enrich(&self, context: &PromptContext) -> String {
        let request = self.request_for(context);
        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.generator.complete(&request).await {
                Ok(text) => {
                    debug!(attempt, "enrichment response received");
                    return text;
                }
                Err(e) if attempt < max_attempts => {
                    let backoff = self.policy.delay_after(attempt);
                    warn!(
                        attempt,
                        max_attempts,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "enrichment attempt failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => {
                    error!(attempt, error = %e, "all enrichment attempts failed, using fallback");
                }
            }
        }

        FALLBACK_ANALYSIS.to_string()
    }
}
