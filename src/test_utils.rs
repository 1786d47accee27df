//! Builders and fakes shared by unit tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::time::Instant;

use crate::cli::types::{FixtureId, Gameweek, PlayerId, PlayerStatus, Position, TeamId};
use crate::enrich::{CompletionRequest, TextGenerator};
use crate::error::{FplError, Result};
use crate::models::{Fixture, Player, Team};

pub fn player(id: u64, team: u32, position: Position, now_cost: u32, total_points: i32) -> Player {
    Player {
        id: PlayerId::new(id),
        web_name: format!("Player{}", id),
        team: TeamId::new(team),
        position,
        now_cost,
        total_points: Some(total_points),
        form: 0.0,
        selected_by_percent: 0.0,
        status: PlayerStatus::Available,
        chance_of_playing: None,
    }
}

pub fn team(id: u32, short_name: &str) -> Team {
    Team {
        id: TeamId::new(id),
        name: format!("{} FC", short_name),
        short_name: short_name.to_string(),
    }
}

pub fn fixture(id: u64, gameweek: u16, home: u32, away: u32, home_diff: u8, away_diff: u8) -> Fixture {
    Fixture {
        id: FixtureId::new(id),
        gameweek: Gameweek::new(gameweek),
        team_home: TeamId::new(home),
        team_away: TeamId::new(away),
        team_home_difficulty: home_diff,
        team_away_difficulty: away_diff,
        started: false,
        finished: false,
    }
}

/// Text generator that replays scripted outcomes and records call times.
///
/// Once the script is exhausted every further call fails.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<(Instant, CompletionRequest)>>,
}

impl ScriptedGenerator {
    pub fn new(script: Vec<Result<String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().iter().map(|(at, _)| *at).collect()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.calls.lock().iter().map(|(_, r)| r.clone()).collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.calls.lock().push((Instant::now(), request.clone()));
        self.script.lock().pop_front().unwrap_or_else(|| {
            Err(FplError::Generation {
                message: "script exhausted".to_string(),
            })
        })
    }
}

/// Text generator that fails whenever the user prompt contains a marker.
pub struct SelectiveGenerator {
    pub fail_marker: String,
}

#[async_trait]
impl TextGenerator for SelectiveGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        if request.user_prompt.contains(&self.fail_marker) {
            return Err(FplError::Generation {
                message: "service unavailable".to_string(),
            });
        }
        Ok(format!("analysis of {}", request.user_prompt.lines().next().unwrap_or("")))
    }
}
