//! Top players command implementation

use super::common::{format_player_line, CommandContext};
use crate::{models::output::TopRecommendations, Result};

/// Handle the top players command
pub async fn handle_top_players(ctx: &CommandContext, as_json: bool) -> Result<()> {
    ctx.require_data()?;
    let service = ctx.service()?;

    if !as_json {
        println!("Ranking players and requesting analysis...");
    }
    let result = service.generate_top_recommendations().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?); // tarpaulin::skip
    } else {
        print!("{}", render_top_players(&result));
    }
    Ok(())
}

pub fn render_top_players(result: &TopRecommendations) -> String {
    let mut out = format!("Gameweek {} top players\n", result.current_gameweek);
    for (position, group) in &result.top_players_by_position {
        out.push_str(&format!("\n{}\n", position));
        for (rank, player) in group.players.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", rank + 1, format_player_line(player)));
        }
        out.push_str(&format!("  Analysis: {}\n", group.analysis));
    }
    out
}
