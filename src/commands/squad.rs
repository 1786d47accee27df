//! Squad generation command implementation

use super::common::{format_player_line, CommandContext};
use crate::{
    cli::types::PlayerId, engine::SquadRequest, models::output::SquadResult, Result,
};

/// Parameters for the squad command
#[derive(Debug, Clone)]
pub struct SquadParams {
    pub budget: f64,
    pub formation: String,
    pub must_have: Vec<PlayerId>,
    pub exclude: Vec<PlayerId>,
    pub as_json: bool,
}

impl SquadParams {
    pub fn to_request(&self) -> SquadRequest {
        SquadRequest::new(self.budget, self.formation.clone())
            .with_must_have(self.must_have.iter().copied())
            .with_excluded(self.exclude.iter().copied())
    }
}

/// Handle the squad command
pub async fn handle_squad(ctx: &CommandContext, params: SquadParams) -> Result<()> {
    ctx.require_data()?;
    let service = ctx.service()?;

    let result = service.generate_squad(params.to_request()).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&result)?); // tarpaulin::skip
    } else {
        print!("{}", render_squad(&result, params.budget));
    }
    Ok(())
}

pub fn render_squad(result: &SquadResult, budget: f64) -> String {
    let mut out = format!(
        "Squad: {} players, £{:.1}m of £{:.1}m, {} projected points\n",
        result.selected_players.len(),
        result.total_cost,
        budget,
        result.projected_points
    );

    let breakdown: Vec<String> = result
        .position_breakdown
        .iter()
        .map(|(position, count)| format!("{} {}", position.short_code(), count))
        .collect();
    out.push_str(&format!("Breakdown: {}\n\n", breakdown.join(", ")));

    for player in &result.selected_players {
        out.push_str(&format!(
            "  {} {}\n",
            player.position.short_code(),
            format_player_line(player)
        ));
    }
    out.push_str(&format!("\nAnalysis: {}\n", result.analysis));
    out
}
