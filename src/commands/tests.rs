//! Integration tests for command handlers

use super::common::{format_player_line, CommandContext};
use super::gameweek::handle_gameweek;
use super::refresh::handle_refresh;
use super::squad::{handle_squad, render_squad, SquadParams};
use super::top_players::{handle_top_players, render_top_players};
use crate::cli::types::{Gameweek, PlayerId, PlayerStatus, Position};
use crate::config::Config;
use crate::engine::Recommendation;
use crate::models::output::{PlayerRecommendation, PositionRecommendation, SquadResult, TopRecommendations};
use crate::snapshot::PlayerStore;
use crate::FplError;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn test_config(db_path: &Path, fpl_base: &str, openai_base: &str) -> Config {
    Config {
        api_key: Some("sk-test".to_string()),
        openai_base_url: openai_base.to_string(),
        model: "test-model".to_string(),
        max_tokens: 100,
        temperature: 0.2,
        backoff_base: Duration::from_millis(1),
        fpl_base_url: fpl_base.to_string(),
        db_path: db_path.to_path_buf(),
    }
}

fn bootstrap_body() -> serde_json::Value {
    let mut elements = Vec::new();
    let mut id = 1;
    for element_type in 1..=4 {
        for i in 0..6 {
            elements.push(json!({
                "id": id,
                "web_name": format!("P{}", id),
                "team": i % 2 + 1,
                "element_type": element_type,
                "now_cost": 45 + i * 5,
                "total_points": 40 + i * 12,
                "form": format!("{}.0", i + 1),
                "selected_by_percent": "10.0",
                "status": "a",
                "chance_of_playing_next_round": null
            }));
            id += 1;
        }
    }
    json!({
        "teams": [
            {"id": 1, "name": "Arsenal", "short_name": "ARS"},
            {"id": 2, "name": "Chelsea", "short_name": "CHE"}
        ],
        "elements": elements
    })
}

fn fixtures_body() -> serde_json::Value {
    json!([
        {"id": 1, "event": 1, "team_h": 1, "team_a": 2, "team_h_difficulty": 3, "team_a_difficulty": 3, "started": true, "finished": true},
        {"id": 2, "event": 2, "team_h": 2, "team_a": 1, "team_h_difficulty": 2, "team_a_difficulty": 4, "started": false, "finished": false}
    ])
}

async fn mount_fpl(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bootstrap_body()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fixtures/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures_body()))
        .mount(server)
        .await;
}

async fn mount_openai(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "Looks good."}}]
        })))
        .mount(server)
        .await;
}

fn recommendation(name: &str) -> PlayerRecommendation {
    PlayerRecommendation {
        player_id: PlayerId::new(7),
        name: name.to_string(),
        team: "ARS".to_string(),
        position: Position::Midfielder,
        price: 7.5,
        total_points: 120,
        form: 5.5,
        value_for_money: 16.0,
        fixture_score: 2.0,
        overall_score: 45.25,
        next_fixtures: vec!["CHE (H) [Diff: 2]".to_string()],
        injury_status: PlayerStatus::Available,
        chance_of_playing: None,
        recommendation: Recommendation::Hold,
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[tokio::test]
    async fn test_refresh_then_gameweek() {
        let tmp = TempDir::new().unwrap();
        let fpl = MockServer::start().await;
        mount_fpl(&fpl).await;

        let config = test_config(
            &tmp.path().join("nested").join("fpl.db"),
            &format!("{}/api", fpl.uri()),
            "http://unused.invalid",
        );
        let mut ctx = CommandContext::new(config.clone()).unwrap();
        assert!(matches!(ctx.require_data(), Err(FplError::NoData)));
        assert!(matches!(handle_gameweek(&ctx), Err(FplError::NoData)));

        handle_refresh(&mut ctx).await.unwrap();

        let snapshot = ctx.snapshot.load();
        assert_eq!(snapshot.player_count(), 24);
        assert_eq!(snapshot.current_gameweek(), Gameweek::new(2));
        assert!(handle_gameweek(&ctx).is_ok());

        // A fresh context reads the persisted data back
        let reopened = CommandContext::new(config).unwrap();
        assert_eq!(reopened.snapshot.load().player_count(), 24);
    }

    #[tokio::test]
    async fn test_refresh_refuses_empty_dataset() {
        let tmp = TempDir::new().unwrap();
        let fpl = MockServer::start().await;
        mount_fpl(&fpl).await;

        let config = test_config(
            &tmp.path().join("fpl.db"),
            &format!("{}/api", fpl.uri()),
            "http://unused.invalid",
        );
        let mut ctx = CommandContext::new(config).unwrap();
        handle_refresh(&mut ctx).await.unwrap();

        let empty = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": [], "elements": []})))
            .mount(&empty)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/fixtures/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&empty)
            .await;

        ctx.config.fpl_base_url = format!("{}/api", empty.uri());
        assert!(matches!(handle_refresh(&mut ctx).await, Err(FplError::NoData)));
        assert_eq!(ctx.snapshot.load().player_count(), 24);
        assert_eq!(ctx.db.player_count().unwrap(), 24);
    }

    #[tokio::test]
    async fn test_squad_and_top_players_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let fpl = MockServer::start().await;
        let openai = MockServer::start().await;
        mount_fpl(&fpl).await;
        mount_openai(&openai).await;

        let config = test_config(
            &tmp.path().join("fpl.db"),
            &format!("{}/api", fpl.uri()),
            &openai.uri(),
        );
        let mut ctx = CommandContext::new(config).unwrap();
        handle_refresh(&mut ctx).await.unwrap();

        let params = SquadParams {
            budget: 100.0,
            formation: "4-4-2".to_string(),
            must_have: vec![PlayerId::new(1)],
            exclude: vec![PlayerId::new(24)],
            as_json: true,
        };
        handle_squad(&ctx, params.clone()).await.unwrap();
        handle_top_players(&ctx, false).await.unwrap();

        let result = ctx
            .service()
            .unwrap()
            .generate_squad(params.to_request())
            .await
            .unwrap();
        assert_eq!(result.analysis, "Looks good.");
        assert!(result
            .selected_players
            .iter()
            .any(|p| p.player_id == PlayerId::new(1)));
        assert!(result
            .selected_players
            .iter()
            .all(|p| p.player_id != PlayerId::new(24)));
    }

    #[tokio::test]
    async fn test_squad_requires_api_key() {
        let tmp = TempDir::new().unwrap();
        let fpl = MockServer::start().await;
        mount_fpl(&fpl).await;

        let mut config = test_config(
            &tmp.path().join("fpl.db"),
            &format!("{}/api", fpl.uri()),
            "http://unused.invalid",
        );
        config.api_key = None;
        let mut ctx = CommandContext::new(config).unwrap();
        handle_refresh(&mut ctx).await.unwrap();

        let params = SquadParams {
            budget: 100.0,
            formation: "4-4-2".to_string(),
            must_have: vec![],
            exclude: vec![],
            as_json: false,
        };
        assert!(matches!(
            handle_squad(&ctx, params).await,
            Err(FplError::MissingApiKey { .. })
        ));
    }

    #[test]
    fn test_format_player_line() {
        let line = format_player_line(&recommendation("Saka"));
        assert_eq!(
            line,
            "Saka (ARS) £7.5m | 120 pts | form 5.5 | score 45.25 | HOLD\n      next: CHE (H) [Diff: 2]"
        );

        let mut doubtful = recommendation("Odegaard");
        doubtful.injury_status = PlayerStatus::Doubtful;
        doubtful.chance_of_playing = Some(75);
        doubtful.next_fixtures.clear();
        assert_eq!(
            format_player_line(&doubtful),
            "Odegaard (ARS) £7.5m | 120 pts | form 5.5 | score 45.25 | HOLD [Doubtful 75%]"
        );
    }

    #[test]
    fn test_render_squad() {
        let mut breakdown = BTreeMap::new();
        for position in Position::ALL {
            breakdown.insert(position, 0);
        }
        breakdown.insert(Position::Midfielder, 1);

        let result = SquadResult {
            selected_players: vec![recommendation("Saka")],
            total_cost: 7.5,
            projected_points: 120,
            analysis: "Thin squad.".to_string(),
            position_breakdown: breakdown,
        };

        let text = render_squad(&result, 50.0);
        assert!(text.starts_with("Squad: 1 players, £7.5m of £50.0m, 120 projected points\n"));
        assert!(text.contains("Breakdown: GKP 0, DEF 0, MID 1, FWD 0"));
        assert!(text.contains("  MID Saka (ARS)"));
        assert!(text.ends_with("Analysis: Thin squad.\n"));
    }

    #[test]
    fn test_render_top_players() {
        let mut groups = BTreeMap::new();
        groups.insert(
            "MIDFIELDER".to_string(),
            PositionRecommendation {
                players: vec![recommendation("Saka")],
                analysis: "Saka is the pick.".to_string(),
            },
        );
        let result = TopRecommendations {
            top_players_by_position: groups,
            current_gameweek: Gameweek::new(5),
            generated_at: 0,
            insights: String::new(),
        };

        let text = render_top_players(&result);
        assert!(text.starts_with("Gameweek 5 top players\n"));
        assert!(text.contains("\nMIDFIELDER\n  1. Saka (ARS)"));
        assert!(text.contains("  Analysis: Saka is the pick.\n"));
    }
}
