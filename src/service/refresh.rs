//! Data refresh: fetch, persist, then swap the live snapshot.

use reqwest::Client;
use tracing::{info, warn};

use crate::error::{FplError, Result};
use crate::fpl::fetch_dataset;
use crate::snapshot::SnapshotHandle;
use crate::storage::{PlayerDatabase, RefreshCounts};

/// Fetch the current dataset from `base_url`, store it and publish it.
///
/// An upstream response without players is refused so an outage cannot wipe
/// the stored data. The snapshot is only replaced after the write commits.
pub async fn refresh_data(
    client: &Client,
    base_url: &str,
    db: &mut PlayerDatabase,
    handle: &SnapshotHandle,
) -> Result<RefreshCounts> {
    let dataset = fetch_dataset(client, base_url).await?;
    if dataset.players.is_empty() {
        warn!("upstream returned no players, keeping stored data");
        return Err(FplError::NoData);
    }

    let counts = db.replace_all(&dataset)?;
    handle.replace(db.load_snapshot()?);

    info!(
        teams = counts.teams,
        players = counts.players,
        fixtures = counts.fixtures,
        "data refresh complete"
    );
    Ok(counts)
}
