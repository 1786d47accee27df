//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::config::default_db_path;

/// Database connection manager for the cached FPL dataset
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open the database at the default cache location
    pub fn new() -> Result<Self> {
        Self::open(default_db_path())
    }

    /// Open (or create) a database file and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure the cache directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute("PRAGMA foreign_keys = ON", [])?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                short_name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                web_name TEXT NOT NULL,
                team_id INTEGER NOT NULL,
                element_type INTEGER NOT NULL,
                now_cost INTEGER NOT NULL,
                total_points INTEGER,
                form REAL NOT NULL DEFAULT 0,
                selected_by_percent REAL NOT NULL DEFAULT 0,
                status TEXT NOT NULL,
                chance_of_playing INTEGER
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fixtures (
                fixture_id INTEGER PRIMARY KEY,
                gameweek INTEGER NOT NULL,
                team_home INTEGER NOT NULL,
                team_away INTEGER NOT NULL,
                team_home_difficulty INTEGER NOT NULL,
                team_away_difficulty INTEGER NOT NULL,
                started INTEGER NOT NULL DEFAULT 0,
                finished INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_position
             ON players(element_type, now_cost)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_gameweek
             ON fixtures(gameweek)",
            [],
        )?;

        Ok(())
    }
}
