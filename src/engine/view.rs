//! Turning scored players into the caller-facing recommendation view.

use super::scorer::ScoredPlayer;
use crate::cli::types::TeamId;
use crate::models::output::PlayerRecommendation;
use crate::models::Fixture;
use crate::snapshot::PlayerStore;

/// Fixtures listed on each recommendation.
pub const NEXT_FIXTURES_SHOWN: usize = 3;

const UNKNOWN_TEAM: &str = "UNK";

fn short_name<S: PlayerStore + ?Sized>(store: &S, team: TeamId) -> String {
    store
        .find_team(team)
        .map(|t| t.short_name)
        .unwrap_or_else(|| UNKNOWN_TEAM.to_string())
}

/// `OPP (H) [Diff: 2]` from the point of view of `team`.
pub fn format_fixture<S: PlayerStore + ?Sized>(store: &S, fixture: &Fixture, team: TeamId) -> String {
    let venue = if fixture.is_home(team) { "(H)" } else { "(A)" };
    format!(
        "{} {} [Diff: {}]",
        short_name(store, fixture.opponent_of(team)),
        venue,
        fixture.difficulty_for(team)
    )
}

pub fn to_recommendation<S: PlayerStore + ?Sized>(
    store: &S,
    scored: &ScoredPlayer,
) -> PlayerRecommendation {
    let player = &scored.player;
    let next_fixtures = store
        .upcoming_fixtures(player.team, NEXT_FIXTURES_SHOWN)
        .iter()
        .map(|f| format_fixture(store, f, player.team))
        .collect();

    PlayerRecommendation {
        player_id: player.id,
        name: player.web_name.clone(),
        team: short_name(store, player.team),
        position: player.position,
        price: player.price(),
        total_points: player.points(),
        form: player.form,
        value_for_money: scored.value_for_money,
        fixture_score: scored.fixture_score,
        overall_score: scored.overall_score,
        next_fixtures,
        injury_status: player.status,
        chance_of_playing: player.chance_of_playing,
        recommendation: scored.recommendation(),
    }
}
