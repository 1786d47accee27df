//! Integration tests for on-disk storage

use fpl_mvp::{
    engine::{select, SquadRequest},
    fpl::types::{BootstrapData, FplFixture},
    fpl::Dataset,
    snapshot::PlayerStore,
    storage::PlayerDatabase,
    Gameweek, PlayerId, PlayerStatus, Position, TeamId,
};
use serde_json::json;
use tempfile::TempDir;

fn wire_dataset() -> Dataset {
    let bootstrap: BootstrapData = serde_json::from_value(json!({
        "teams": [
            {"id": 1, "name": "Arsenal", "short_name": "ARS"},
            {"id": 2, "name": "Liverpool", "short_name": "LIV"}
        ],
        "elements": [
            {"id": 1, "web_name": "Raya", "team": 1, "element_type": 1, "now_cost": 55, "total_points": 130, "form": "4.5", "selected_by_percent": "25.0", "status": "a"},
            {"id": 2, "web_name": "Alisson", "team": 2, "element_type": 1, "now_cost": 55, "total_points": 110, "form": "3.0", "selected_by_percent": "12.0", "status": "d", "chance_of_playing_next_round": 50},
            {"id": 3, "web_name": "Saliba", "team": 1, "element_type": 2, "now_cost": 60, "total_points": 140, "form": "5.0", "selected_by_percent": "30.0", "status": "a"},
            {"id": 4, "web_name": "Salah", "team": 2, "element_type": 3, "now_cost": 130, "total_points": 210, "form": "8.0", "selected_by_percent": "60.0", "status": "a"},
            {"id": 5, "web_name": "Havertz", "team": 1, "element_type": 4, "now_cost": 80, "total_points": 95, "form": "2.0", "selected_by_percent": "8.0", "status": "i", "chance_of_playing_next_round": 0},
            {"id": 6, "web_name": "Assistant", "team": 1, "element_type": 5, "now_cost": 10, "status": "a"}
        ]
    }))
    .unwrap();

    let fixtures: Vec<FplFixture> = serde_json::from_value(json!([
        {"id": 1, "event": 7, "team_h": 1, "team_a": 2, "team_h_difficulty": 4, "team_a_difficulty": 4, "started": true, "finished": true},
        {"id": 2, "event": 8, "team_h": 2, "team_a": 1, "team_h_difficulty": 4, "team_a_difficulty": 5, "started": false, "finished": false},
        {"id": 3, "event": null, "team_h": 1, "team_a": 2, "team_h_difficulty": 4, "team_a_difficulty": 4, "started": false, "finished": false}
    ]))
    .unwrap();

    Dataset::from_wire(bootstrap, fixtures)
}

#[test]
fn test_dataset_persists_across_connections() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("cache").join("fpl.db");

    {
        let mut db = PlayerDatabase::open(&db_path).unwrap();
        let counts = db.replace_all(&wire_dataset()).unwrap();
        assert_eq!(counts.players, 5);
        assert_eq!(counts.fixtures, 2);
    }

    let db = PlayerDatabase::open(&db_path).unwrap();
    let snapshot = db.load_snapshot().unwrap();

    assert_eq!(snapshot.player_count(), 5);
    assert_eq!(snapshot.current_gameweek(), Gameweek::new(8));

    let alisson = snapshot.find_by_id(PlayerId::new(2)).unwrap();
    assert_eq!(alisson.status, PlayerStatus::Doubtful);
    assert_eq!(alisson.chance_of_playing, Some(50));
    assert_eq!(alisson.form, 3.0);

    let upcoming = snapshot.upcoming_fixtures(TeamId::new(1), 3);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].difficulty_for(TeamId::new(1)), 5);
}

#[test]
fn test_stored_snapshot_feeds_selection() {
    let tmp = TempDir::new().unwrap();
    let mut db = PlayerDatabase::open(tmp.path().join("fpl.db")).unwrap();
    db.replace_all(&wire_dataset()).unwrap();
    let snapshot = db.load_snapshot().unwrap();

    let selection = select(&SquadRequest::new(100.0, "1-1-1"), &snapshot).unwrap();
    let positions: Vec<Position> = selection.players.iter().map(|s| s.player.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward
        ]
    );
    // Form, points and value outweigh Raya's harder fixture
    assert_eq!(selection.players[0].player.id, PlayerId::new(1));
    assert_eq!(selection.total_cost_tenths(), 55 + 60 + 130 + 80);
}

#[test]
fn test_refresh_replaces_rather_than_merges() {
    let tmp = TempDir::new().unwrap();
    let mut db = PlayerDatabase::open(tmp.path().join("fpl.db")).unwrap();
    db.replace_all(&wire_dataset()).unwrap();

    let mut trimmed = wire_dataset();
    trimmed.players.retain(|p| p.position == Position::Midfielder);
    db.replace_all(&trimmed).unwrap();

    let snapshot = db.load_snapshot().unwrap();
    assert_eq!(snapshot.all_player_ids().into_iter().collect::<Vec<_>>(), vec![PlayerId::new(4)]);
}
