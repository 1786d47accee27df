//! Current gameweek command implementation

use super::common::CommandContext;
use crate::{snapshot::PlayerStore, Result};

/// Handle the gameweek command
pub fn handle_gameweek(ctx: &CommandContext) -> Result<()> {
    ctx.require_data()?;
    println!("Current gameweek: {}", ctx.snapshot.load().current_gameweek());
    Ok(())
}
