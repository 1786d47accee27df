//! Dataset persistence: full replacement on refresh, full load into a snapshot

use super::schema::PlayerDatabase;
use crate::cli::types::{FixtureId, Gameweek, PlayerId, PlayerStatus, Position, TeamId};
use crate::fpl::Dataset;
use crate::models::{Fixture, Player, Team};
use crate::snapshot::Snapshot;
use anyhow::Result;
use rusqlite::{params, types::Type, Row};
use tracing::debug;

/// Row counts written by a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshCounts {
    pub teams: usize,
    pub players: usize,
    pub fixtures: usize,
}

impl PlayerDatabase {
    /// Replace every stored record with `dataset` in a single transaction.
    ///
    /// Either the whole dataset lands or nothing changes.
    pub fn replace_all(&mut self, dataset: &Dataset) -> Result<RefreshCounts> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM fixtures", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.execute("DELETE FROM teams", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO teams (team_id, name, short_name) VALUES (?, ?, ?)",
            )?;
            for team in &dataset.teams {
                stmt.execute(params![team.id.as_u32(), team.name, team.short_name])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO players
                 (player_id, web_name, team_id, element_type, now_cost, total_points,
                  form, selected_by_percent, status, chance_of_playing)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for p in &dataset.players {
                stmt.execute(params![
                    p.id.as_u64(),
                    p.web_name,
                    p.team.as_u32(),
                    p.position.element_type(),
                    p.now_cost,
                    p.total_points,
                    p.form,
                    p.selected_by_percent,
                    p.status.code(),
                    p.chance_of_playing,
                ])?;
            }

            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO fixtures
                 (fixture_id, gameweek, team_home, team_away,
                  team_home_difficulty, team_away_difficulty, started, finished)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for f in &dataset.fixtures {
                stmt.execute(params![
                    f.id.as_u64(),
                    f.gameweek.as_u16(),
                    f.team_home.as_u32(),
                    f.team_away.as_u32(),
                    f.team_home_difficulty,
                    f.team_away_difficulty,
                    f.started,
                    f.finished,
                ])?;
            }
        }

        tx.commit()?;

        let counts = RefreshCounts {
            teams: dataset.teams.len(),
            players: dataset.players.len(),
            fixtures: dataset.fixtures.len(),
        };
        debug!(?counts, "replaced stored dataset");
        Ok(counts)
    }

    /// Load every stored record into an immutable snapshot
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot::new(
            self.get_all_players()?,
            self.get_all_teams()?,
            self.get_all_fixtures()?,
        ))
    }

    pub fn get_all_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, web_name, team_id, element_type, now_cost, total_points,
                    form, selected_by_percent, status, chance_of_playing
             FROM players ORDER BY player_id",
        )?;

        let rows = stmt.query_map([], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    pub fn get_all_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_id, name, short_name FROM teams ORDER BY team_id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Team {
                id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
                short_name: row.get(2)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    pub fn get_all_fixtures(&self) -> Result<Vec<Fixture>> {
        let mut stmt = self.conn.prepare(
            "SELECT fixture_id, gameweek, team_home, team_away,
                    team_home_difficulty, team_away_difficulty, started, finished
             FROM fixtures ORDER BY gameweek, fixture_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Fixture {
                id: FixtureId::new(row.get(0)?),
                gameweek: Gameweek::new(row.get(1)?),
                team_home: TeamId::new(row.get(2)?),
                team_away: TeamId::new(row.get(3)?),
                team_home_difficulty: row.get(4)?,
                team_away_difficulty: row.get(5)?,
                started: row.get(6)?,
                finished: row.get(7)?,
            })
        })?;

        let mut fixtures = Vec::new();
        for row in rows {
            fixtures.push(row?);
        }
        Ok(fixtures)
    }

    /// Number of stored players; zero means no refresh has run yet.
    pub fn player_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    let position = Position::from_element_type(row.get(3)?).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e))
    })?;
    let status: String = row.get(8)?;

    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        web_name: row.get(1)?,
        team: TeamId::new(row.get(2)?),
        position,
        now_cost: row.get(4)?,
        total_points: row.get(5)?,
        form: row.get(6)?,
        selected_by_percent: row.get(7)?,
        status: PlayerStatus::from_code(&status),
        chance_of_playing: row.get(9)?,
    })
}
