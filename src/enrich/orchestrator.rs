//! Concurrent fan-out of enrichment calls with a keyed join.

use std::collections::HashMap;
use std::hash::Hash;
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::client::{EnrichmentClient, FALLBACK_ANALYSIS};
use super::PromptContext;

/// Run one enrichment call per context concurrently and wait for all of them.
///
/// The result always holds every key. A task that never produced text
/// (panic, abort) maps to [`FALLBACK_ANALYSIS`]. Dropping the returned future
/// aborts the tasks still in flight.
pub async fn enrich_all<K>(
    client: &EnrichmentClient,
    contexts: Vec<(K, PromptContext)>,
) -> HashMap<K, String>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    let keys: Vec<K> = contexts.iter().map(|(key, _)| key.clone()).collect();
    let mut tasks = JoinSet::new();

    for (key, context) in contexts {
        let client = client.clone();
        tasks.spawn(async move {
            let text = client.enrich(&context).await;
            (key, text)
        });
    }
    debug!(tasks = keys.len(), "enrichment fan-out started");

    let mut results = HashMap::with_capacity(keys.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((key, text)) => {
                results.insert(key, text);
            }
            Err(e) => error!(error = %e, "enrichment task did not complete"),
        }
    }

    for key in keys {
        results
            .entry(key)
            .or_insert_with(|| FALLBACK_ANALYSIS.to_string());
    }
    results
}
