use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::info;

use super::types::{BootstrapData, Dataset, FplFixture};
use crate::Result;


/// Base path for the public Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

fn json_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

pub async fn fetch_bootstrap(client: &Client, base_url: &str) -> Result<BootstrapData> {
    let url = format!("{}/bootstrap-static/", base_url.trim_end_matches('/'));

    let res = client
        .get(&url)
        .headers(json_headers())
        .send()
        .await?
        .error_for_status()?
        .json::<BootstrapData>()
        .await?;

    Ok(res)
}

pub async fn fetch_fixtures(client: &Client, base_url: &str) -> Result<Vec<FplFixture>> {
    let url = format!("{}/fixtures/", base_url.trim_end_matches('/'));

    let res = client
        .get(&url)
        .headers(json_headers())
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<FplFixture>>()
        .await?;

    Ok(res)
}

/// Fetch bootstrap data and fixtures concurrently and convert them.
pub async fn fetch_dataset(client: &Client, base_url: &str) -> Result<Dataset> {
    let (bootstrap, fixtures) = tokio::try_join!(
        fetch_bootstrap(client, base_url),
        fetch_fixtures(client, base_url)
    )?;

    info!(
        teams = bootstrap.teams.len(),
        elements = bootstrap.elements.len(),
        fixtures = fixtures.len(),
        "fetched FPL data"
    );

    Ok(Dataset::from_wire(bootstrap, fixtures))
}
