//! Prompt builders.

use std::fmt::Write;

use super::PromptContext;
use crate::cli::types::Position;
use crate::engine::ScoredPlayer;

pub const ANALYST_SYSTEM_PROMPT: &str =
    "You are an expert Fantasy Premier League analyst. Provide concise, data-driven insights.";

/// Context for the top players at one position.
pub fn top_players_prompt(position: Position, players: &[ScoredPlayer]) -> PromptContext {
    let mut prompt = format!(
        "Analyze these top {} {} players for Fantasy Premier League:\n\n",
        players.len(),
        position
    );
    for (rank, scored) in players.iter().enumerate() {
        let p = &scored.player;
        let _ = writeln!(
            prompt,
            "{}. {} (£{:.1}m) - {} pts, Form: {:.1}",
            rank + 1,
            p.web_name,
            p.price(),
            p.points(),
            p.form
        );
    }
    prompt.push_str(
        "\nProvide: 1) Best value pick, 2) Premium option, 3) Differential pick. Max 3 sentences total.",
    );
    PromptContext::new(ANALYST_SYSTEM_PROMPT, prompt)
}

/// Context for a whole generated squad.
pub fn squad_prompt(budget: f64, squad: &[ScoredPlayer]) -> PromptContext {
    let mut prompt = format!("Analyze this FPL squad (Budget: £{:.1}m):\n\n", budget);
    for scored in squad {
        let p = &scored.player;
        let _ = writeln!(
            prompt,
            "{} - {} (£{:.1}m): {} pts",
            p.web_name,
            p.position,
            p.price(),
            p.points()
        );
    }
    prompt.push_str(
        "\nProvide: 1) Squad balance assessment, 2) Weak areas, 3) Transfer suggestions. Max 4 sentences.",
    );
    PromptContext::new(ANALYST_SYSTEM_PROMPT, prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::score;
    use crate::test_utils::player;

    #[test]
    fn test_top_players_prompt() {
        let mut salah = player(1, 1, Position::Midfielder, 130, 210);
        salah.web_name = "Salah".to_string();
        salah.form = 8.2;
        let mut saka = player(2, 2, Position::Midfielder, 100, 160);
        saka.web_name = "Saka".to_string();
        saka.form = 6.0;

        let ctx = top_players_prompt(Position::Midfielder, &[score(&salah, &[]), score(&saka, &[])]);

        assert_eq!(ctx.system_prompt, ANALYST_SYSTEM_PROMPT);
        assert!(ctx
            .user_prompt
            .starts_with("Analyze these top 2 Midfielder players"));
        assert!(ctx.user_prompt.contains("1. Salah (£13.0m) - 210 pts, Form: 8.2\n"));
        assert!(ctx.user_prompt.contains("2. Saka (£10.0m) - 160 pts, Form: 6.0\n"));
        assert!(ctx.user_prompt.ends_with("Max 3 sentences total."));
    }

    #[test]
    fn test_squad_prompt() {
        let mut keeper = player(1, 1, Position::Goalkeeper, 45, 80);
        keeper.web_name = "Raya".to_string();

        let ctx = squad_prompt(83.5, &[score(&keeper, &[])]);

        assert!(ctx.user_prompt.starts_with("Analyze this FPL squad (Budget: £83.5m):"));
        assert!(ctx.user_prompt.contains("Raya - Goalkeeper (£4.5m): 80 pts\n"));
    }

    #[test]
    fn test_empty_squad_prompt_still_valid() {
        let ctx = squad_prompt(50.0, &[]);
        assert!(ctx.user_prompt.contains("Budget: £50.0m"));
    }
}
