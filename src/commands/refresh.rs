//! Data refresh command implementation

use reqwest::Client;

use super::common::CommandContext;
use crate::{service::refresh_data, snapshot::PlayerStore, Result};

/// Handle the refresh command
pub async fn handle_refresh(ctx: &mut CommandContext) -> Result<()> {
    println!("Fetching players, teams and fixtures from FPL...");

    let client = Client::new();
    let counts =
        refresh_data(&client, &ctx.config.fpl_base_url, &mut ctx.db, &ctx.snapshot).await?;

    println!(
        "✓ Stored {} teams, {} players, {} fixtures",
        counts.teams, counts.players, counts.fixtures
    );
    println!("Current gameweek: {}", ctx.snapshot.load().current_gameweek());
    Ok(())
}
